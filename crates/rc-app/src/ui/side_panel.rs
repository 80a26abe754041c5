use egui::{Color32, Context, RichText};
use rfd::FileDialog;

use rc_core::{DesignStyle, RoomType};

use crate::pictures::{PREVIEW_KEY, Picture};
use crate::ui::{UiComponent, UiContext, UiEvent, fitted_image};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

pub struct SidePanel {
    style: DesignStyle,
    room_type: RoomType,
}

impl Default for SidePanel {
    fn default() -> Self {
        Self {
            style: DesignStyle::default(),
            room_type: RoomType::default(),
        }
    }
}

impl UiComponent for SidePanel {
    fn show(&mut self, ctx: &Context, ui_ctx: &UiContext) {
        if !ui_ctx.logged_in {
            return;
        }

        egui::SidePanel::left("side_panel")
            .default_width(320.0)
            .show(ctx, |ui| {
                ui.heading("Design options");
                ui.separator();

                ui.label(RichText::new("Room type").small().color(Color32::GRAY));
                egui::ComboBox::from_id_salt("room_type_combo")
                    .selected_text(self.room_type.label())
                    .width(ui.available_width())
                    .show_ui(ui, |ui| {
                        for room_type in RoomType::ALL {
                            if ui
                                .selectable_value(&mut self.room_type, room_type, room_type.label())
                                .changed()
                            {
                                ui_ctx.send_event(UiEvent::RoomTypeChanged(room_type));
                            }
                        }
                    });
                ui.add_space(8.0);

                ui.label(RichText::new("Design style").small().color(Color32::GRAY));
                egui::ComboBox::from_id_salt("style_combo")
                    .selected_text(self.style.label())
                    .width(ui.available_width())
                    .show_ui(ui, |ui| {
                        for style in DesignStyle::ALL {
                            if ui
                                .selectable_value(&mut self.style, style, style.label())
                                .changed()
                            {
                                ui_ctx.send_event(UiEvent::StyleChanged(style));
                            }
                        }
                    });

                ui.separator();

                if ui.button("📁 Choose file…").clicked() {
                    if let Some(path) = FileDialog::new()
                        .add_filter("Image", IMAGE_EXTENSIONS)
                        .pick_file()
                    {
                        ui_ctx.send_event(UiEvent::ImagePicked(path));
                    }
                }

                if let Some(file_name) = &ui_ctx.selected_file {
                    ui.label(RichText::new(file_name).small());
                }

                ui.add_space(4.0);
                match ui_ctx.pictures.get(PREVIEW_KEY) {
                    Some(Picture::Ready(texture)) => {
                        fitted_image(ui, texture, egui::vec2(ui.available_width(), 240.0));
                    }
                    Some(Picture::Broken) => {
                        // Selection stands; the backend decides whether the
                        // file is acceptable.
                        ui.colored_label(Color32::YELLOW, "No preview available for this file");
                    }
                    _ => {
                        ui.label(
                            RichText::new("PNG, JPG, GIF up to 10MB")
                                .small()
                                .color(Color32::GRAY),
                        );
                    }
                }

                ui.add_space(8.0);

                let can_generate = ui_ctx.selected_file.is_some() && !ui_ctx.is_generating;
                let label = if ui_ctx.is_generating {
                    "Generating…"
                } else {
                    "🎨 Generate Design"
                };
                let generate_button = ui.add_enabled(
                    can_generate,
                    egui::Button::new(RichText::new(label).size(14.0))
                        .min_size(egui::vec2(ui.available_width(), 32.0)),
                );
                if generate_button.clicked() {
                    ui_ctx.send_event(UiEvent::Generate {
                        style: self.style,
                        room_type: self.room_type,
                    });
                }

                if let Some(error) = &ui_ctx.error {
                    ui.add_space(4.0);
                    ui.colored_label(Color32::RED, error);
                }
            });
    }
}
