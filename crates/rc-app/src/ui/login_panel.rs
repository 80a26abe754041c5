use egui::{Color32, Context, RichText};

use crate::client::schemas::Credentials;
use crate::events::AppEvent;
use crate::ui::{UiComponent, UiContext, UiEvent};

const FIELD_WIDTH: f32 = 260.0;

/// Login/register gate shown while no user is signed in. All form state is
/// local; credentials leave through a single event per submission and are
/// never retained.
#[derive(Default)]
pub struct LoginPanel {
    registering: bool,
    username: String,
    password: String,
    error: Option<String>,
    notice: Option<String>,
}

impl UiComponent for LoginPanel {
    fn show(&mut self, ctx: &Context, ui_ctx: &UiContext) {
        if ui_ctx.logged_in {
            return;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(ui.available_height() * 0.22);

                ui.heading(RichText::new("ROOMCRAFT.AI").size(30.0).strong());
                ui.label(
                    RichText::new("INTERIOR DESIGN | AI POWERED")
                        .small()
                        .color(Color32::GRAY),
                );
                ui.add_space(20.0);

                ui.add(
                    egui::TextEdit::singleline(&mut self.username)
                        .hint_text("Username")
                        .desired_width(FIELD_WIDTH),
                );
                ui.add_space(6.0);
                ui.add(
                    egui::TextEdit::singleline(&mut self.password)
                        .hint_text("Password")
                        .password(true)
                        .desired_width(FIELD_WIDTH),
                );
                ui.add_space(8.0);

                if let Some(error) = &self.error {
                    ui.colored_label(Color32::RED, error);
                }
                if let Some(notice) = &self.notice {
                    ui.colored_label(Color32::GREEN, notice);
                }

                let action = if self.registering { "Register" } else { "Login" };
                let ready = !self.username.trim().is_empty() && !self.password.is_empty();
                let submit = ui.add_enabled(
                    ready,
                    egui::Button::new(action).min_size(egui::vec2(FIELD_WIDTH, 30.0)),
                );
                if submit.clicked() {
                    self.error = None;
                    self.notice = None;
                    let credentials = Credentials {
                        username: self.username.trim().to_owned(),
                        password: self.password.clone(),
                    };
                    if self.registering {
                        ui_ctx.send_event(UiEvent::Register(credentials));
                    } else {
                        ui_ctx.send_event(UiEvent::SignIn(credentials));
                    }
                }

                ui.add_space(6.0);
                let toggle = if self.registering {
                    "Already have an account? Login"
                } else {
                    "New user? Register"
                };
                if ui.small_button(toggle).clicked() {
                    self.registering = !self.registering;
                    self.error = None;
                    self.notice = None;
                }
            });
        });
    }

    fn on_app_event(&mut self, event: &AppEvent) {
        match event {
            AppEvent::SignedIn => {
                self.username.clear();
                self.password.clear();
                self.error = None;
                self.notice = None;
            }
            AppEvent::RegisterSucceeded => {
                self.registering = false;
                self.username.clear();
                self.password.clear();
                self.error = None;
                self.notice = Some("Registration successful! Please login.".to_owned());
            }
            AppEvent::AuthFailed(message) => {
                self.error = Some(message.clone());
                self.notice = None;
            }
        }
    }
}
