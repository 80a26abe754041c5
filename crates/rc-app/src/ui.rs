mod central_panel;
mod history_panel;
mod login_panel;
mod side_panel;
mod top_panel;

pub use central_panel::CentralPanel;
pub use history_panel::HistoryPanel;
pub use login_panel::LoginPanel;
pub use side_panel::SidePanel;
pub use top_panel::TopPanel;

use std::path::PathBuf;
use std::sync::mpsc::Sender;

use egui::{TextureHandle, Ui, Vec2};

use rc_core::{DesignStyle, RoomType};

use crate::client::schemas::{Credentials, GenerationRecord};
use crate::events::AppEvent;
use crate::pictures::PictureStore;

/// User intents emitted by panels and applied by the app shell.
#[derive(Debug, Clone)]
pub enum UiEvent {
    ImagePicked(PathBuf),
    StyleChanged(DesignStyle),
    RoomTypeChanged(RoomType),
    Generate {
        style: DesignStyle,
        room_type: RoomType,
    },

    OpenHistory,
    CloseHistory,

    SignIn(Credentials),
    Register(Credentials),
    SignOut,
}

/// Per-frame view of the session handed to every component, plus the
/// channel panels use to talk back.
pub struct UiContext {
    pub logged_in: bool,
    pub selected_file: Option<String>,
    pub is_generating: bool,
    pub progress: f32,
    pub error: Option<String>,
    pub generated_url: Option<String>,
    pub show_history: bool,
    pub history_loading: bool,
    pub history: Vec<GenerationRecord>,
    pub pictures: PictureStore,

    sender: Sender<UiEvent>,
}

impl UiContext {
    pub fn new(sender: Sender<UiEvent>) -> Self {
        Self {
            logged_in: false,
            selected_file: None,
            is_generating: false,
            progress: 1.0,
            error: None,
            generated_url: None,
            show_history: false,
            history_loading: false,
            history: Vec::new(),
            pictures: PictureStore::default(),
            sender,
        }
    }

    pub fn send_event(&self, event: UiEvent) {
        self.sender.send(event).unwrap();
    }
}

pub struct UiState {
    components: Vec<Box<dyn UiComponent>>,
    pub ui_ctx: UiContext,
}

impl UiState {
    pub fn new(sender: Sender<UiEvent>) -> Self {
        Self {
            components: Vec::new(),
            ui_ctx: UiContext::new(sender),
        }
    }

    pub fn add_component(&mut self, component: Box<dyn UiComponent>) {
        self.components.push(component);
    }

    pub fn draw(&mut self, ctx: &egui::Context) {
        for component in self.components.iter_mut() {
            component.show(ctx, &self.ui_ctx);
        }
    }

    pub fn broadcast(&mut self, event: &AppEvent) {
        for component in self.components.iter_mut() {
            component.on_app_event(event);
        }
    }
}

pub trait UiComponent: Send + Sync {
    fn show(&mut self, ctx: &egui::Context, ui_ctx: &UiContext);

    fn on_app_event(&mut self, _event: &AppEvent) {}
}

/// Draw a texture scaled to fit `max_size`, never upscaling.
pub(crate) fn fitted_image(ui: &mut Ui, texture: &TextureHandle, max_size: Vec2) {
    let size = texture.size_vec2();
    let scale = (max_size.x / size.x).min(max_size.y / size.y).min(1.0);
    ui.add(egui::Image::new((texture.id(), size * scale)));
}
