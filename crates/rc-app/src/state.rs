use std::path::PathBuf;

use rc_core::ProgressSim;

use crate::client::schemas::{GenerationRecord, GenerationResult, ImageUpload};
use crate::ui::UiEvent;
use crate::worker::{WorkerCommand, WorkerResponse};

pub const NO_IMAGE_SELECTED: &str = "Please select an image first";

/// The file the user picked, with its bytes held so submission does not
/// re-read disk.
#[derive(Debug, Clone)]
pub struct SelectedImage {
    pub path: PathBuf,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl SelectedImage {
    fn upload(&self) -> ImageUpload {
        ImageUpload {
            file_name: self.file_name.clone(),
            bytes: self.bytes.clone(),
        }
    }
}

/// In-memory session state, discarded on exit. Pure event-in/commands-out:
/// handlers mutate the session and return the worker commands to dispatch,
/// which keeps every flow unit-testable without threads or sockets.
#[derive(Default)]
pub struct SessionState {
    pub logged_in: bool,

    pub selected: Option<SelectedImage>,
    pub generated: Option<GenerationResult>,
    pub is_generating: bool,
    pub error: Option<String>,
    pub progress: ProgressSim,

    pub show_history: bool,
    pub history_loading: bool,
    pub history: Vec<GenerationRecord>,
}

impl SessionState {
    pub fn on_ui_event(&mut self, event: UiEvent) -> Vec<WorkerCommand> {
        match event {
            UiEvent::ImagePicked(path) => {
                self.pick_image(path);
                Vec::new()
            }

            // Changing either option invalidates the previous result.
            UiEvent::StyleChanged(_) | UiEvent::RoomTypeChanged(_) => {
                self.generated = None;
                self.error = None;
                Vec::new()
            }

            UiEvent::Generate { style, room_type } => {
                if self.is_generating {
                    return Vec::new();
                }
                let Some(selected) = &self.selected else {
                    self.error = Some(NO_IMAGE_SELECTED.to_owned());
                    return Vec::new();
                };

                self.is_generating = true;
                self.error = None;
                self.progress.start();
                vec![WorkerCommand::Generate {
                    image: selected.upload(),
                    style,
                    room_type,
                }]
            }

            UiEvent::OpenHistory => {
                self.show_history = true;
                self.refresh_history()
            }

            UiEvent::CloseHistory => {
                self.show_history = false;
                Vec::new()
            }

            UiEvent::SignIn(credentials) => vec![WorkerCommand::SignIn(credentials)],
            UiEvent::Register(credentials) => vec![WorkerCommand::Register(credentials)],

            UiEvent::SignOut => {
                self.logged_in = false;
                Vec::new()
            }
        }
    }

    pub fn on_worker_response(&mut self, response: WorkerResponse) -> Vec<WorkerCommand> {
        match response {
            WorkerResponse::GenerationFinished(result) => {
                self.is_generating = false;
                self.progress.finish();

                match result {
                    Ok(generated) => {
                        self.error = None;
                        let mut commands = vec![WorkerCommand::FetchImage {
                            url: generated.url.clone(),
                        }];
                        self.generated = Some(generated);
                        if self.show_history {
                            commands.extend(self.refresh_history());
                        }
                        commands
                    }
                    Err(err) => {
                        self.error = Some(err.to_string());
                        Vec::new()
                    }
                }
            }

            WorkerResponse::HistoryLoaded(result) => {
                self.history_loading = false;

                match result {
                    Ok(records) => {
                        let commands = records
                            .iter()
                            .flat_map(|record| {
                                [record.original_image.clone(), record.generated_image.clone()]
                            })
                            .map(|url| WorkerCommand::FetchImage { url })
                            .collect();
                        self.history = records;
                        commands
                    }
                    Err(err) => {
                        // Not surfaced to the user; the panel just shows empty.
                        log::error!("failed to fetch generation history: {err}");
                        self.history.clear();
                        Vec::new()
                    }
                }
            }

            WorkerResponse::SignInFinished(result) => {
                if result.is_ok() {
                    self.logged_in = true;
                }
                Vec::new()
            }

            // Outcome is broadcast to the login panel; nothing to track here.
            WorkerResponse::RegisterFinished(_) => Vec::new(),

            // Textures are the app shell's concern.
            WorkerResponse::ImageFetched { .. } => Vec::new(),
        }
    }

    fn pick_image(&mut self, path: PathBuf) {
        match std::fs::read(&path) {
            Ok(bytes) => {
                let file_name = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "upload".to_owned());
                self.selected = Some(SelectedImage { path, file_name, bytes });
                self.generated = None;
                self.error = None;
            }
            Err(err) => {
                log::warn!("could not read {}: {err}", path.display());
                self.error = Some(format!("Could not read file: {err}"));
            }
        }
    }

    fn refresh_history(&mut self) -> Vec<WorkerCommand> {
        if self.history_loading {
            return Vec::new();
        }
        self.history_loading = true;
        vec![WorkerCommand::FetchHistory]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rc_core::{DesignStyle, RoomType};

    use crate::error::AppError;

    fn state_with_selection() -> SessionState {
        let mut state = SessionState::default();
        state.selected = Some(SelectedImage {
            path: PathBuf::from("/tmp/room.png"),
            file_name: "room.png".to_owned(),
            bytes: vec![1, 2, 3],
        });
        state
    }

    fn generate_event() -> UiEvent {
        UiEvent::Generate {
            style: DesignStyle::Scandinavian,
            room_type: RoomType::Bedroom,
        }
    }

    fn record(id: i64) -> GenerationRecord {
        GenerationRecord {
            id,
            original_image: format!("http://x/original_{id}.jpg"),
            generated_image: format!("http://x/generated_{id}.jpg"),
            style: "industrial".to_owned(),
            room_type: "kitchen".to_owned(),
            timestamp: "2024-01-15 10:30:00".to_owned(),
        }
    }

    #[test]
    fn test_generate_without_file_is_local_error() {
        let mut state = SessionState::default();

        let commands = state.on_ui_event(generate_event());

        assert!(commands.is_empty(), "no network call may be issued");
        assert_eq!(state.error.as_deref(), Some(NO_IMAGE_SELECTED));
        assert!(!state.is_generating);
    }

    #[test]
    fn test_generate_submits_one_request() {
        let mut state = state_with_selection();

        let commands = state.on_ui_event(generate_event());

        assert_eq!(commands.len(), 1);
        assert!(matches!(
            &commands[0],
            WorkerCommand::Generate { image, style, room_type }
                if image.file_name == "room.png"
                    && *style == DesignStyle::Scandinavian
                    && *room_type == RoomType::Bedroom
        ));
        assert!(state.is_generating);
        assert!(state.progress.is_running());
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_second_generate_while_in_flight_is_ignored() {
        let mut state = state_with_selection();

        assert_eq!(state.on_ui_event(generate_event()).len(), 1);
        assert!(state.on_ui_event(generate_event()).is_empty());
    }

    #[test]
    fn test_picking_a_file_populates_selection_without_commands() {
        let path = std::env::temp_dir().join(format!("rc-state-test-{}.png", std::process::id()));
        std::fs::write(&path, b"fake image bytes").unwrap();

        let mut state = SessionState::default();
        state.error = Some("old".to_owned());
        let commands = state.on_ui_event(UiEvent::ImagePicked(path.clone()));

        assert!(commands.is_empty());
        let selected = state.selected.as_ref().unwrap();
        assert_eq!(selected.bytes, b"fake image bytes");
        assert!(selected.file_name.starts_with("rc-state-test-"));
        assert_eq!(state.error, None);

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_option_change_clears_previous_result() {
        let mut state = state_with_selection();
        state.generated = Some(GenerationResult {
            url: "https://x/old.png".to_owned(),
            stored_image: None,
        });
        state.error = Some("old".to_owned());

        state.on_ui_event(UiEvent::StyleChanged(DesignStyle::Bohemian));

        assert_eq!(state.generated, None);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_generation_success_stores_url_and_fetches_image() {
        let mut state = state_with_selection();
        state.on_ui_event(generate_event());
        state.error = Some("stale".to_owned());

        let commands = state.on_worker_response(WorkerResponse::GenerationFinished(Ok(
            GenerationResult {
                url: "https://x/img.png".to_owned(),
                stored_image: None,
            },
        )));

        assert!(!state.is_generating);
        assert!(!state.progress.is_running());
        assert_eq!(state.generated.as_ref().unwrap().url, "https://x/img.png");
        assert_eq!(state.error, None);
        assert_eq!(commands.len(), 1);
        assert!(matches!(
            &commands[0],
            WorkerCommand::FetchImage { url } if url == "https://x/img.png"
        ));
    }

    #[test]
    fn test_generation_success_refreshes_open_history() {
        let mut state = state_with_selection();
        state.show_history = true;
        state.on_ui_event(generate_event());

        let commands = state.on_worker_response(WorkerResponse::GenerationFinished(Ok(
            GenerationResult {
                url: "https://x/img.png".to_owned(),
                stored_image: None,
            },
        )));

        assert_eq!(commands.len(), 2);
        assert!(matches!(&commands[1], WorkerCommand::FetchHistory));
        assert!(state.history_loading);
    }

    #[test]
    fn test_generation_failure_surfaces_backend_message() {
        let mut state = state_with_selection();
        state.on_ui_event(generate_event());

        let commands = state.on_worker_response(WorkerResponse::GenerationFinished(Err(
            AppError::Backend("bad image".to_owned()),
        )));

        assert!(commands.is_empty());
        assert!(!state.is_generating);
        assert_eq!(state.error.as_deref(), Some("bad image"));
    }

    #[test]
    fn test_open_history_fetches_once() {
        let mut state = SessionState::default();

        let first = state.on_ui_event(UiEvent::OpenHistory);
        assert_eq!(first.len(), 1);
        assert!(matches!(&first[0], WorkerCommand::FetchHistory));
        assert!(state.show_history);
        assert!(state.history_loading);

        // Reopening while the fetch is outstanding must not double up.
        assert!(state.on_ui_event(UiEvent::OpenHistory).is_empty());
    }

    #[test]
    fn test_history_success_replaces_list_and_fetches_thumbnails() {
        let mut state = SessionState::default();
        state.on_ui_event(UiEvent::OpenHistory);

        let commands =
            state.on_worker_response(WorkerResponse::HistoryLoaded(Ok(vec![record(1), record(2)])));

        assert!(!state.history_loading);
        assert_eq!(state.history.len(), 2);
        assert_eq!(commands.len(), 4, "two images per record");
        assert!(commands.iter().all(|c| matches!(c, WorkerCommand::FetchImage { .. })));
    }

    #[test]
    fn test_history_failure_is_silent_and_empty() {
        let mut state = SessionState::default();
        state.history = vec![record(1)];
        state.on_ui_event(UiEvent::OpenHistory);

        let commands = state.on_worker_response(WorkerResponse::HistoryLoaded(Err(
            AppError::Backend("boom".to_owned()),
        )));

        assert!(commands.is_empty());
        assert!(state.history.is_empty());
        assert_eq!(state.error, None, "history failures are not surfaced");
    }

    #[test]
    fn test_sign_in_flips_flag_and_sign_out_clears_it() {
        let mut state = state_with_selection();

        state.on_worker_response(WorkerResponse::SignInFinished(Ok(())));
        assert!(state.logged_in);

        state.on_ui_event(UiEvent::SignOut);
        assert!(!state.logged_in);
        // The rest of the session survives a logout.
        assert!(state.selected.is_some());
    }

    #[test]
    fn test_failed_sign_in_leaves_flag_clear() {
        let mut state = SessionState::default();

        state.on_worker_response(WorkerResponse::SignInFinished(Err(AppError::Backend(
            "Invalid credentials".to_owned(),
        ))));

        assert!(!state.logged_in);
    }
}
