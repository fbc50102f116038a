//! Command dispatch and rendering
//!
//! All user-visible text is produced here; the player core only
//! returns tagged outcomes. Command names are case-insensitive.

use console::style;
use log::warn;
use vidstream_core::{Video, VideoId};
use vidstream_player::{PlayTransition, PlayerSession, SelectionProvider};

/// Whether the interpreter loop should keep going
pub enum CommandOutcome {
    Continue,
    Exit,
}

pub fn execute(
    session: &mut PlayerSession,
    line: &str,
    selection: &mut dyn SelectionProvider,
) -> CommandOutcome {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return CommandOutcome::Continue;
    };
    let args: Vec<&str> = parts.collect();

    match command.to_uppercase().as_str() {
        "NUMBER_OF_VIDEOS" => number_of_videos(session),
        "SHOW_ALL_VIDEOS" => show_all_videos(session),
        "PLAY" => match args.first() {
            Some(id) => play(session, id),
            None => usage("PLAY <video_id>"),
        },
        "PLAY_RANDOM" => play_random(session),
        "STOP" => stop(session),
        "PAUSE" => pause(session),
        "CONTINUE" => resume(session),
        "SHOW_PLAYING" => show_playing(session),
        "CREATE_PLAYLIST" => match args.first() {
            Some(name) => create_playlist(session, name),
            None => usage("CREATE_PLAYLIST <playlist_name>"),
        },
        "ADD_TO_PLAYLIST" => match args.as_slice() {
            [name, id] => add_to_playlist(session, name, id),
            _ => usage("ADD_TO_PLAYLIST <playlist_name> <video_id>"),
        },
        "SHOW_ALL_PLAYLISTS" => show_all_playlists(session),
        "SHOW_PLAYLIST" => match args.first() {
            Some(name) => show_playlist(session, name),
            None => usage("SHOW_PLAYLIST <playlist_name>"),
        },
        "REMOVE_FROM_PLAYLIST" => match args.as_slice() {
            [name, id] => remove_from_playlist(session, name, id),
            _ => usage("REMOVE_FROM_PLAYLIST <playlist_name> <video_id>"),
        },
        "CLEAR_PLAYLIST" => match args.first() {
            Some(name) => clear_playlist(session, name),
            None => usage("CLEAR_PLAYLIST <playlist_name>"),
        },
        "DELETE_PLAYLIST" => match args.first() {
            Some(name) => delete_playlist(session, name),
            None => usage("DELETE_PLAYLIST <playlist_name>"),
        },
        "SEARCH_VIDEOS" => match args.as_slice() {
            [] => usage("SEARCH_VIDEOS <search_term>"),
            terms => search_videos(session, &terms.join(" "), selection),
        },
        "SEARCH_VIDEOS_WITH_TAG" => match args.first() {
            Some(tag) => search_videos_with_tag(session, tag, selection),
            None => usage("SEARCH_VIDEOS_WITH_TAG <video_tag>"),
        },
        "FLAG_VIDEO" => match args.as_slice() {
            [] => usage("FLAG_VIDEO <video_id> [flag_reason]"),
            [id, reason @ ..] => flag_video(session, id, &reason.join(" ")),
        },
        "ALLOW_VIDEO" => match args.first() {
            Some(id) => allow_video(session, id),
            None => usage("ALLOW_VIDEO <video_id>"),
        },
        "HELP" => help(),
        "EXIT" => return CommandOutcome::Exit,
        other => {
            warn!("Unknown command: {other}");
            println!("Please enter a valid command, type HELP for a list of available commands.");
        }
    }
    CommandOutcome::Continue
}

fn usage(pattern: &str) {
    println!("Please enter the command as: {pattern}");
}

fn number_of_videos(session: &PlayerSession) {
    println!("{} videos in the library", session.number_of_videos());
}

fn show_all_videos(session: &PlayerSession) {
    println!("Here's a list of all available videos:");
    for (video, flag_reason) in session.all_videos() {
        println!("  {}", video_line(&video, flag_reason.as_deref()));
    }
}

fn play(session: &mut PlayerSession, id: &str) {
    match session.play(&VideoId::new(id)) {
        Ok(transition) => print_transition(&transition),
        Err(err) => println!("Cannot play video: {err}"),
    }
}

fn play_random(session: &mut PlayerSession) {
    match session.play_random() {
        Ok(transition) => print_transition(&transition),
        Err(vidstream_player::PlaybackError::NoEligibleVideos) => {
            println!("No videos available")
        }
        Err(err) => println!("Cannot play video: {err}"),
    }
}

fn stop(session: &mut PlayerSession) {
    match session.stop() {
        Ok(video) => println!("Stopping video: {}", video.title),
        Err(err) => println!("Cannot stop video: {err}"),
    }
}

fn pause(session: &mut PlayerSession) {
    use vidstream_player::PlaybackError;
    match session.pause() {
        Ok(video) => println!("Pausing video: {}", video.title),
        // Already carries the full sentence, including the title
        Err(err @ PlaybackError::AlreadyPaused(_)) => println!("{err}"),
        Err(err) => println!("Cannot pause video: {err}"),
    }
}

fn resume(session: &mut PlayerSession) {
    match session.resume() {
        Ok(video) => println!("Continuing video: {}", video.title),
        Err(err) => println!("Cannot continue video: {err}"),
    }
}

fn show_playing(session: &PlayerSession) {
    match session.now_playing() {
        Some(now) if now.paused => println!("Currently playing: {} - PAUSED", now.video),
        Some(now) => println!("Currently playing: {}", now.video),
        None => println!("No video is currently playing"),
    }
}

fn create_playlist(session: &mut PlayerSession, name: &str) {
    match session.create_playlist(name) {
        Ok(()) => println!("Successfully created new playlist: {name}"),
        Err(err) => println!("Cannot create playlist: {err}"),
    }
}

fn add_to_playlist(session: &mut PlayerSession, name: &str, id: &str) {
    match session.add_to_playlist(name, &VideoId::new(id)) {
        Ok(video) => println!("Added video to {name}: {}", video.title),
        Err(err) => println!("Cannot add video to {name}: {err}"),
    }
}

fn show_all_playlists(session: &PlayerSession) {
    let names = session.list_playlists();
    if names.is_empty() {
        println!("No playlists exist yet");
        return;
    }
    println!("Showing all playlists:");
    for name in names {
        println!("  {name}");
    }
}

fn show_playlist(session: &PlayerSession, name: &str) {
    match session.show_playlist(name) {
        Ok(entries) => {
            println!("Showing playlist: {name}");
            if entries.is_empty() {
                println!("  No videos here yet");
            }
            for entry in entries {
                println!(
                    "  {}",
                    video_line(&entry.video, entry.flag_reason.as_deref())
                );
            }
        }
        Err(err) => println!("Cannot show playlist {name}: {err}"),
    }
}

fn remove_from_playlist(session: &mut PlayerSession, name: &str, id: &str) {
    match session.remove_from_playlist(name, &VideoId::new(id)) {
        Ok(video) => println!("Removed video from {name}: {}", video.title),
        Err(err) => println!("Cannot remove video from {name}: {err}"),
    }
}

fn clear_playlist(session: &mut PlayerSession, name: &str) {
    match session.clear_playlist(name) {
        Ok(()) => println!("Successfully removed all videos from {name}"),
        Err(err) => println!("Cannot clear playlist {name}: {err}"),
    }
}

fn delete_playlist(session: &mut PlayerSession, name: &str) {
    match session.delete_playlist(name) {
        Ok(()) => println!("Deleted playlist: {name}"),
        Err(err) => println!("Cannot delete playlist {name}: {err}"),
    }
}

fn search_videos(session: &mut PlayerSession, term: &str, selection: &mut dyn SelectionProvider) {
    let results = session.search_by_title(term);
    present_results(session, term, &results, selection);
}

fn search_videos_with_tag(
    session: &mut PlayerSession,
    tag: &str,
    selection: &mut dyn SelectionProvider,
) {
    let results = session.search_by_tag(tag);
    present_results(session, tag, &results, selection);
}

fn present_results(
    session: &mut PlayerSession,
    term: &str,
    results: &[Video],
    selection: &mut dyn SelectionProvider,
) {
    if results.is_empty() {
        println!("No search results for {term}");
        return;
    }
    println!("Here are the results for {term}:");
    for (index, video) in results.iter().enumerate() {
        println!("  {}) {video}", index + 1);
    }
    println!("Would you like to play any of the above? If yes, specify the number of the video.");
    println!("If your answer is not a valid number, we will assume it's a no.");
    match session.play_selection(results, selection) {
        Ok(Some(transition)) => print_transition(&transition),
        Ok(None) => {}
        Err(err) => println!("Cannot play video: {err}"),
    }
}

fn flag_video(session: &mut PlayerSession, id: &str, reason: &str) {
    let reason = (!reason.is_empty()).then_some(reason);
    match session.flag_video(&VideoId::new(id), reason) {
        Ok(outcome) => {
            if let Some(stopped) = &outcome.stopped {
                println!("Stopping video: {}", stopped.title);
            }
            println!(
                "Successfully flagged video: {} (reason: {})",
                outcome.video.title, outcome.reason
            );
        }
        Err(err) => println!("Cannot flag video: {err}"),
    }
}

fn allow_video(session: &mut PlayerSession, id: &str) {
    match session.allow_video(&VideoId::new(id)) {
        Ok(video) => println!("Successfully removed flag from video: {}", video.title),
        Err(err) => println!("Cannot remove flag from video: {err}"),
    }
}

fn print_transition(transition: &PlayTransition) {
    if let Some(stopped) = &transition.stopped {
        println!("Stopping video: {}", stopped.title);
    }
    println!("Playing video: {}", transition.started.title);
}

fn video_line(video: &Video, flag_reason: Option<&str>) -> String {
    match flag_reason {
        Some(reason) => format!("{video} - FLAGGED (reason: {reason})"),
        None => video.to_string(),
    }
}

fn help() {
    println!("{}", style("Available commands:").bold().cyan());
    for (command, description) in [
        ("NUMBER_OF_VIDEOS", "Show how many videos are in the library"),
        ("SHOW_ALL_VIDEOS", "List all videos in the library"),
        ("PLAY <video_id>", "Play the specified video"),
        ("PLAY_RANDOM", "Play a random unflagged video"),
        ("STOP", "Stop the current video"),
        ("PAUSE", "Pause the current video"),
        ("CONTINUE", "Resume the paused video"),
        ("SHOW_PLAYING", "Show the video that is playing"),
        ("CREATE_PLAYLIST <playlist_name>", "Create a new playlist"),
        (
            "ADD_TO_PLAYLIST <playlist_name> <video_id>",
            "Add a video to a playlist",
        ),
        ("SHOW_ALL_PLAYLISTS", "List all playlists"),
        ("SHOW_PLAYLIST <playlist_name>", "Show a playlist's videos"),
        (
            "REMOVE_FROM_PLAYLIST <playlist_name> <video_id>",
            "Remove a video from a playlist",
        ),
        ("CLEAR_PLAYLIST <playlist_name>", "Remove all videos from a playlist"),
        ("DELETE_PLAYLIST <playlist_name>", "Delete a playlist"),
        ("SEARCH_VIDEOS <search_term>", "Search videos by title"),
        ("SEARCH_VIDEOS_WITH_TAG <video_tag>", "Search videos by tag"),
        ("FLAG_VIDEO <video_id> [flag_reason]", "Flag a video"),
        ("ALLOW_VIDEO <video_id>", "Remove a flag from a video"),
        ("HELP", "Show this help"),
        ("EXIT", "Terminate the program"),
    ] {
        println!("  {command} - {description}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vidstream_core::VideoCatalog;
    use vidstream_player::NoSelection;

    #[test]
    fn test_video_line_unflagged() {
        let video = Video::new("amazing_cats_video_id", "Amazing Cats", &["#cat", "#animal"]);
        assert_eq!(
            video_line(&video, None),
            "Amazing Cats (amazing_cats_video_id) [#cat #animal]"
        );
    }

    #[test]
    fn test_video_line_flagged() {
        let video = Video::new("amazing_cats_video_id", "Amazing Cats", &["#cat", "#animal"]);
        assert_eq!(
            video_line(&video, Some("dont_like_cats")),
            "Amazing Cats (amazing_cats_video_id) [#cat #animal] - FLAGGED (reason: dont_like_cats)"
        );
    }

    #[test]
    fn test_execute_blank_line_continues() {
        let mut session = PlayerSession::new(VideoCatalog::demo());
        assert!(matches!(
            execute(&mut session, "   \n", &mut NoSelection),
            CommandOutcome::Continue
        ));
    }

    #[test]
    fn test_execute_exit_is_case_insensitive() {
        let mut session = PlayerSession::new(VideoCatalog::demo());
        assert!(matches!(
            execute(&mut session, "exit\n", &mut NoSelection),
            CommandOutcome::Exit
        ));
    }

    #[test]
    fn test_execute_play_changes_state() {
        let mut session = PlayerSession::new(VideoCatalog::demo());
        execute(&mut session, "PLAY amazing_cats_video_id\n", &mut NoSelection);
        assert_eq!(
            session.playback_state().active_video().map(|id| id.as_str()),
            Some("amazing_cats_video_id")
        );
    }

    #[test]
    fn test_execute_flag_reason_joined_from_args() {
        let mut session = PlayerSession::new(VideoCatalog::demo());
        execute(
            &mut session,
            "FLAG_VIDEO amazing_cats_video_id dont like cats\n",
            &mut NoSelection,
        );
        assert_eq!(
            session.flag_reason(&VideoId::new("amazing_cats_video_id")),
            Some("dont like cats")
        );
    }

    #[test]
    fn test_execute_flag_without_reason_uses_default() {
        let mut session = PlayerSession::new(VideoCatalog::demo());
        execute(
            &mut session,
            "FLAG_VIDEO amazing_cats_video_id\n",
            &mut NoSelection,
        );
        assert_eq!(
            session.flag_reason(&VideoId::new("amazing_cats_video_id")),
            Some("Not supplied")
        );
    }
}
