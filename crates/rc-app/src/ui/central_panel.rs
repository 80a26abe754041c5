use egui::{Color32, Context, RichText};

use crate::pictures::Picture;
use crate::ui::{UiComponent, UiContext, fitted_image};

#[derive(Default)]
pub struct CentralPanel {}

impl UiComponent for CentralPanel {
    fn show(&mut self, ctx: &Context, ui_ctx: &UiContext) {
        if !ui_ctx.logged_in {
            return;
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                if ui_ctx.is_generating {
                    ui.add_space(ui.available_height() * 0.35);
                    ui.add(
                        egui::ProgressBar::new(ui_ctx.progress)
                            .desired_width(360.0)
                            .show_percentage()
                            .animate(true),
                    );
                    ui.add_space(8.0);
                    ui.label("Generating your design…");
                } else if let Some(url) = &ui_ctx.generated_url {
                    ui.add_space(12.0);
                    ui.heading("Generated design");
                    ui.add_space(8.0);

                    match ui_ctx.pictures.get(url.as_str()) {
                        Some(Picture::Ready(texture)) => {
                            let max = egui::vec2(
                                ui.available_width() - 32.0,
                                ui.available_height() - 48.0,
                            );
                            fitted_image(ui, texture, max);
                        }
                        Some(Picture::Broken) => {
                            ui.colored_label(
                                Color32::RED,
                                "Could not load the generated image",
                            );
                        }
                        _ => {
                            ui.spinner();
                            ui.label(RichText::new("Loading image…").color(Color32::GRAY));
                        }
                    }

                    ui.add_space(8.0);
                    ui.hyperlink_to("Open image", url);
                } else {
                    ui.add_space(ui.available_height() * 0.4);
                    ui.label(
                        RichText::new("Generated design will appear here")
                            .size(18.0)
                            .color(Color32::GRAY),
                    );
                }
            });
        });
    }
}
