use egui::{Color32, Context, RichText};

use crate::ui::{UiComponent, UiContext, UiEvent};

#[derive(Default)]
pub struct TopPanel {}

impl UiComponent for TopPanel {
    fn show(&mut self, ctx: &Context, ui_ctx: &UiContext) {
        if !ui_ctx.logged_in {
            return;
        }

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🏠 RoomCraft");
                ui.label(
                    RichText::new("interior design | AI powered")
                        .small()
                        .color(Color32::GRAY),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Logout").clicked() {
                        ui_ctx.send_event(UiEvent::SignOut);
                    }
                    ui.add_space(8.0);
                    if ui.button("🕘 View History").clicked() {
                        ui_ctx.send_event(UiEvent::OpenHistory);
                    }
                });
            });
        });
    }
}
