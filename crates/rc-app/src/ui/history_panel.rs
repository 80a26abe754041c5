use egui::{Color32, Context, RichText, Ui};

use crate::client::schemas::GenerationRecord;
use crate::pictures::Picture;
use crate::ui::{UiComponent, UiContext, UiEvent, fitted_image};

const THUMBNAIL_SIZE: f32 = 150.0;

#[derive(Default)]
pub struct HistoryPanel {}

impl HistoryPanel {
    fn show_record_card(&self, ui: &mut Ui, ui_ctx: &UiContext, record: &GenerationRecord) {
        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new("Original").small().color(Color32::GRAY));
                    self.thumbnail(ui, ui_ctx, &record.original_image);
                });

                ui.add_space(8.0);

                ui.vertical(|ui| {
                    ui.label(RichText::new("Generated").small().color(Color32::GRAY));
                    self.thumbnail(ui, ui_ctx, &record.generated_image);
                });

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Style:").color(Color32::GRAY));
                        ui.label(RichText::new(&record.style).strong());
                    });
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Room type:").color(Color32::GRAY));
                        ui.label(RichText::new(&record.room_type).strong());
                    });
                    ui.horizontal(|ui| {
                        ui.label(RichText::new("Generated:").color(Color32::GRAY));
                        ui.label(RichText::new(record.formatted_timestamp()).strong());
                    });
                });
            });
        });

        ui.add_space(6.0);
    }

    /// Broken links are flagged in place; the record itself stays.
    fn thumbnail(&self, ui: &mut Ui, ui_ctx: &UiContext, url: &str) {
        match ui_ctx.pictures.get(url) {
            Some(Picture::Ready(texture)) => {
                fitted_image(ui, texture, egui::vec2(THUMBNAIL_SIZE, THUMBNAIL_SIZE));
            }
            Some(Picture::Broken) => {
                ui.colored_label(Color32::YELLOW, "⚠ image unavailable");
            }
            _ => {
                ui.spinner();
            }
        }
    }
}

impl UiComponent for HistoryPanel {
    fn show(&mut self, ctx: &Context, ui_ctx: &UiContext) {
        if !ui_ctx.logged_in || !ui_ctx.show_history {
            return;
        }

        let mut open = true;
        egui::Window::new("Generation History")
            .open(&mut open)
            .collapsible(false)
            .default_size([760.0, 480.0])
            .show(ctx, |ui| {
                if ui_ctx.history_loading {
                    ui.vertical_centered(|ui| {
                        ui.add_space(32.0);
                        ui.spinner();
                        ui.add_space(32.0);
                    });
                } else if ui_ctx.history.is_empty() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(32.0);
                        ui.label(
                            RichText::new("No generations found. Try generating some designs!")
                                .color(Color32::GRAY),
                        );
                        ui.add_space(32.0);
                    });
                } else {
                    egui::ScrollArea::vertical()
                        .auto_shrink([false; 2])
                        .show(ui, |ui| {
                            for record in &ui_ctx.history {
                                self.show_record_card(ui, ui_ctx, record);
                            }
                        });
                }
            });

        if !open {
            ui_ctx.send_event(UiEvent::CloseHistory);
        }
    }
}
