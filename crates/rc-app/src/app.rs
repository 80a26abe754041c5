use std::sync::mpsc::{Receiver, channel};
use std::time::Duration;

use crate::client::DesignClient;
use crate::client::config::ClientConfig;
use crate::events::AppEvent;
use crate::pictures::PREVIEW_KEY;
use crate::state::SessionState;
use crate::ui::{CentralPanel, HistoryPanel, LoginPanel, SidePanel, TopPanel, UiEvent, UiState};
use crate::worker::{ClientWorker, WorkerCommand, WorkerResponse};

pub struct RoomcraftApp {
    state: SessionState,
    ui: UiState,
    worker: ClientWorker,
    ui_events: Receiver<UiEvent>,
}

impl RoomcraftApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: ClientConfig) -> anyhow::Result<Self> {
        let client = DesignClient::new(config)?;
        let worker = ClientWorker::new(client);

        let (sender, ui_events) = channel();
        let mut ui = UiState::new(sender);
        // The login gate draws the central panel while logged out; panel
        // order matters for the rest (side/top before central).
        ui.add_component(Box::new(LoginPanel::default()));
        ui.add_component(Box::new(TopPanel::default()));
        ui.add_component(Box::new(SidePanel::default()));
        ui.add_component(Box::new(CentralPanel::default()));
        ui.add_component(Box::new(HistoryPanel::default()));

        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        Ok(Self {
            state: SessionState::default(),
            ui,
            worker,
            ui_events,
        })
    }

    fn dispatch(&mut self, command: WorkerCommand) {
        if let WorkerCommand::FetchImage { url } = &command {
            // Fetch each image once; an entry (ready, in flight, or
            // broken) means there is nothing to do.
            if self.ui.ui_ctx.pictures.contains(url) {
                return;
            }
            self.ui.ui_ctx.pictures.mark_loading(url);
        }
        self.worker.submit(command);
    }

    fn apply_ui_event(&mut self, ctx: &egui::Context, event: UiEvent) {
        let picked = matches!(event, UiEvent::ImagePicked(_));

        let commands = self.state.on_ui_event(event);
        for command in commands {
            self.dispatch(command);
        }

        if picked {
            if let Some(selected) = &self.state.selected {
                self.ui
                    .ui_ctx
                    .pictures
                    .insert_bytes(ctx, PREVIEW_KEY, &selected.bytes);
            }
        }
    }

    fn apply_response(&mut self, ctx: &egui::Context, response: WorkerResponse) {
        // Fetched bytes only feed the picture cache; everything else goes
        // through the session state machine.
        let response = match response {
            WorkerResponse::ImageFetched { url, result } => {
                match result {
                    Ok(bytes) => self.ui.ui_ctx.pictures.insert_bytes(ctx, &url, &bytes),
                    Err(err) => {
                        log::warn!("could not load image {url}: {err}");
                        self.ui.ui_ctx.pictures.mark_broken(&url);
                    }
                }
                return;
            }
            other => other,
        };

        match &response {
            WorkerResponse::SignInFinished(Ok(())) => self.ui.broadcast(&AppEvent::SignedIn),
            WorkerResponse::SignInFinished(Err(err)) => {
                self.ui.broadcast(&AppEvent::AuthFailed(err.to_string()));
            }
            WorkerResponse::RegisterFinished(Ok(())) => {
                self.ui.broadcast(&AppEvent::RegisterSucceeded);
            }
            WorkerResponse::RegisterFinished(Err(err)) => {
                self.ui.broadcast(&AppEvent::AuthFailed(err.to_string()));
            }
            // A fresh history load retries previously broken thumbnails.
            WorkerResponse::HistoryLoaded(Ok(_)) => self.ui.ui_ctx.pictures.clear_broken(),
            _ => {}
        }

        let commands = self.state.on_worker_response(response);
        for command in commands {
            self.dispatch(command);
        }
    }

    fn sync_view(&mut self) {
        let state = &self.state;
        let view = &mut self.ui.ui_ctx;

        view.logged_in = state.logged_in;
        view.selected_file = state.selected.as_ref().map(|image| image.file_name.clone());
        view.is_generating = state.is_generating;
        view.progress = state.progress.fraction();
        view.error = state.error.clone();
        view.generated_url = state.generated.as_ref().map(|result| result.url.clone());
        view.show_history = state.show_history;
        view.history_loading = state.history_loading;
        view.history = state.history.clone();
    }
}

impl eframe::App for RoomcraftApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Some(response) = self.worker.try_recv() {
            self.apply_response(ctx, response);
        }

        self.sync_view();
        self.ui.draw(ctx);

        let mut changed = false;
        while let Ok(event) = self.ui_events.try_recv() {
            changed = true;
            self.apply_ui_event(ctx, event);
        }
        if changed {
            ctx.request_repaint();
        }

        // Keep frames coming while anything is outstanding, so the
        // progress bar animates and worker results land without input.
        if self.state.is_generating {
            ctx.request_repaint_after(Duration::from_millis(100));
        } else if self.state.history_loading || self.ui.ui_ctx.pictures.has_loading() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
