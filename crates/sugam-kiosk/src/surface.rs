//! The kiosk's fixed control surface: typed lines mapped onto coordinator
//! operations. `1`/`2`/`3` mirror the language shortcuts of the original
//! page; `lang <tag>` accepts a tag directly.

use sugam_core::{Coordinator, Lang, VisualMode};

pub const HELP: &str = "\
Commands:
  find <text>    filter the station list (empty text clears the filter)
  select <id>    select a station from the list
  next           announce the next train for the selection
  go             spoken navigation guidance to the selection
  buzz           haptic alert
  contrast       toggle high contrast
  text           toggle large text
  1 / 2 / 3      language: English / Hindi / Marathi
  lang <tag>     language by tag (en, hi, mr)
  listen         start voice search (the next line is the transcript)
  stopv          stop voice search
  help           this list
  quit           leave the kiosk";

/// One action on the control surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Find(String),
    Select(u32),
    AnnounceNext,
    Vibrate,
    Navigate,
    ToggleContrast,
    ToggleLargeText,
    Language(Lang),
    StartVoice,
    StopVoice,
    Help,
    Quit,
}

impl Command {
    /// Parse a typed line. `None` means the line is not a command; while
    /// listening it becomes the recognition transcript.
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        let (head, rest) = line
            .split_once(' ')
            .map(|(head, rest)| (head, rest.trim()))
            .unwrap_or((line, ""));
        match (head, rest) {
            ("find", query) => Some(Command::Find(query.to_string())),
            ("select", id) => id.parse().ok().map(Command::Select),
            ("next", "") => Some(Command::AnnounceNext),
            ("buzz", "") => Some(Command::Vibrate),
            ("go", "") => Some(Command::Navigate),
            ("contrast", "") => Some(Command::ToggleContrast),
            ("text", "") => Some(Command::ToggleLargeText),
            ("1", "") => Some(Command::Language(Lang::En)),
            ("2", "") => Some(Command::Language(Lang::Hi)),
            ("3", "") => Some(Command::Language(Lang::Mr)),
            ("lang", tag) if !tag.is_empty() => Some(Command::Language(Lang::from_tag(tag))),
            ("listen", "") => Some(Command::StartVoice),
            ("stopv", "") => Some(Command::StopVoice),
            ("help", "") => Some(Command::Help),
            ("quit", "") | ("exit", "") => Some(Command::Quit),
            _ => None,
        }
    }
}

/// Dispatch one parsed command. `Help` and `Quit` belong to the host loop.
pub fn apply(coordinator: &mut Coordinator, command: Command) {
    match command {
        Command::Find(query) => coordinator.set_query(query),
        Command::Select(id) => coordinator.select_station(id),
        Command::AnnounceNext => coordinator.announce_next(),
        Command::Vibrate => coordinator.trigger_vibration(),
        Command::Navigate => coordinator.request_navigation(),
        Command::ToggleContrast => coordinator.toggle_visual_mode(VisualMode::Contrast),
        Command::ToggleLargeText => coordinator.toggle_visual_mode(VisualMode::LargeText),
        Command::Language(lang) => coordinator.set_language(lang),
        Command::StartVoice => coordinator.start_voice_search(),
        Command::StopVoice => coordinator.stop_voice_search(),
        Command::Help | Command::Quit => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sugam_core::{Directory, DirectoryConfig, Feedback};

    #[test]
    fn test_every_surface_action_parses() {
        assert_eq!(
            Command::parse("find andheri"),
            Some(Command::Find("andheri".to_string()))
        );
        assert_eq!(Command::parse("find"), Some(Command::Find(String::new())));
        assert_eq!(Command::parse("select 3"), Some(Command::Select(3)));
        assert_eq!(Command::parse("next"), Some(Command::AnnounceNext));
        assert_eq!(Command::parse("buzz"), Some(Command::Vibrate));
        assert_eq!(Command::parse("go"), Some(Command::Navigate));
        assert_eq!(Command::parse("contrast"), Some(Command::ToggleContrast));
        assert_eq!(Command::parse("text"), Some(Command::ToggleLargeText));
        assert_eq!(Command::parse("listen"), Some(Command::StartVoice));
        assert_eq!(Command::parse("stopv"), Some(Command::StopVoice));
        assert_eq!(Command::parse("help"), Some(Command::Help));
        assert_eq!(Command::parse("quit"), Some(Command::Quit));
    }

    #[test]
    fn test_language_shortcuts_match_the_keyboard_mapping() {
        assert_eq!(Command::parse("1"), Some(Command::Language(Lang::En)));
        assert_eq!(Command::parse("2"), Some(Command::Language(Lang::Hi)));
        assert_eq!(Command::parse("3"), Some(Command::Language(Lang::Mr)));
        assert_eq!(Command::parse("lang hi"), Some(Command::Language(Lang::Hi)));
        // Unknown tags keep the Marathi fallback of the display layer.
        assert_eq!(Command::parse("lang de"), Some(Command::Language(Lang::Mr)));
    }

    #[test]
    fn test_non_commands_become_transcript_candidates() {
        assert_eq!(Command::parse("dahisar east please"), None);
        assert_eq!(Command::parse("select four"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn test_whitespace_is_tolerated() {
        assert_eq!(
            Command::parse("  select   2  "),
            Some(Command::Select(2)),
        );
        assert_eq!(
            Command::parse("find  मिर "),
            Some(Command::Find("मिर".to_string()))
        );
    }

    #[test]
    fn test_apply_routes_to_the_coordinator() {
        let directory = Directory::from_config(DirectoryConfig::builtin()).unwrap();
        let mut coordinator = Coordinator::new(directory, Feedback::silent());

        apply(&mut coordinator, Command::Select(2));
        assert_eq!(coordinator.selected(), Some(2));

        apply(&mut coordinator, Command::Find("मिर".to_string()));
        assert_eq!(coordinator.view().stations.len(), 1);

        apply(&mut coordinator, Command::Language(Lang::Hi));
        assert_eq!(coordinator.lang(), Lang::Hi);

        apply(&mut coordinator, Command::ToggleContrast);
        assert!(coordinator.view().contrast);
    }
}
