use crate::classify_app::layout::{Direction, Layout};
use crate::classify_app::view_model::{ImageView, PredictionLine, ViewModel};
use eframe::egui;

const RESULTS_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(245, 245, 245);

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderOutput {
    pub upload_clicked: bool,
}

/// Draws a [`ViewModel`] and keeps the GPU texture of the current upload.
#[derive(Default)]
pub struct Render {
    texture: Option<(u64, egui::TextureHandle)>,
    /// Width of the upload row in the last frame, used to center it.
    row_width: f32,
}

impl Render {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, ctx: &egui::Context, view: &ViewModel) -> RenderOutput {
        let mut output = RenderOutput::default();

        if let Some(image) = &view.image {
            self.ensure_texture(ctx, image);
        }

        let Self { texture, row_width } = self;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                ui.heading(egui::RichText::new(view.heading).size(32.0).strong());
                ui.add_space(20.0);

                if let Some(loading) = view.loading_indicator {
                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(loading).monospace().size(18.0));
                        ui.add(egui::Spinner::new().size(18.0));
                    });
                }

                if let Some(upload_text) = view.upload_button {
                    ui.add_space(20.0);
                    with_layout(ui, view.layout, row_width, |ui| {
                        if ui.button(upload_text).clicked() {
                            output.upload_clicked = true;
                        }
                        if let (Some(image), Some((_, texture))) = (&view.image, texture.as_ref()) {
                            let (width, height) = image.display_size();
                            ui.image((texture.id(), egui::vec2(width, height)));
                        }
                    });
                }

                ui.add_space(20.0);
                show_results(ui, view.results_filled, &view.prediction_lines);
            });
        });

        output
    }

    fn ensure_texture(&mut self, ctx: &egui::Context, image: &ImageView) {
        if matches!(&self.texture, Some((id, _)) if *id == image.upload_id) {
            return;
        }

        let rgba = image.image.to_rgba8();
        let size = [rgba.width() as usize, rgba.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
        let texture = ctx.load_texture(
            format!("upload-{}", image.upload_id),
            color_image,
            egui::TextureOptions::LINEAR,
        );

        self.texture = Some((image.upload_id, texture));
    }

}

/// Space to put before a row of `row_width` so it sits centered in `available`.
fn leading_space(available: f32, row_width: f32) -> f32 {
    ((available - row_width) / 2.0).max(0.0)
}

fn with_layout(
    ui: &mut egui::Ui,
    layout: Layout,
    row_width: &mut f32,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    match layout.direction {
        Direction::Column => {
            ui.vertical_centered(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(layout.gap, layout.gap);
                add_contents(ui);
            });
        }
        // egui lays rows out left to right, so the row is measured each frame
        // and shifted by half the leftover width on the next one.
        Direction::Row => {
            let lead = leading_space(ui.available_width(), *row_width);
            ui.horizontal(|ui| {
                ui.add_space(lead);
                ui.spacing_mut().item_spacing = egui::vec2(layout.gap, layout.gap);
                let start = ui.cursor().min.x;
                add_contents(ui);
                let measured = ui.min_rect().right() - start;
                if (measured - *row_width).abs() > 0.5 {
                    *row_width = measured;
                    ui.ctx().request_repaint();
                }
            });
        }
    }
}

fn show_results(ui: &mut egui::Ui, filled: bool, lines: &[PredictionLine]) {
    let frame = if filled {
        egui::Frame::none()
            .fill(RESULTS_BACKGROUND)
            .inner_margin(egui::Margin::symmetric(20.0, 10.0))
    } else {
        egui::Frame::none()
    };

    frame.show(ui, |ui| {
        for line in lines {
            ui.horizontal_wrapped(|ui| {
                ui.label("There are");
                ui.label(egui::RichText::new(&line.percent).strong());
                ui.label(format!("chances that it is a {}", line.label));
            })
            .response
            .on_hover_text(&line.sentence);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_space_centers_row() {
        assert_eq!(leading_space(900.0, 500.0), 200.0);
        assert_eq!(leading_space(400.0, 400.0), 0.0);
    }

    #[test]
    fn test_leading_space_never_negative() {
        assert_eq!(leading_space(300.0, 500.0), 0.0);
    }
}
