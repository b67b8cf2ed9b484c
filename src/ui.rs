use crate::core::playback::SPEED_CHOICES;
use crate::core::pointer::PointerCapture;
use crate::core::rig::CameraMode;
use crate::hud::HudText;
use crate::loaders::Series;
use crate::session::{Session, ViewerAction};

const HUD_COLOR: egui::Color32 = egui::Color32::from_rgb(74, 158, 255);
const HEADING_COLOR: egui::Color32 = egui::Color32::from_rgb(100, 200, 100);

/// Read-only view of everything the panels display
pub struct PanelView<'a> {
    pub session: &'a Session,
    pub hud: &'a HudText,
    pub series: Series,
    pub source: Option<&'a str>,
    pub fps: f32,
}

/// Build the HUD, playback, camera and data panels. Clicks become actions.
pub fn draw_panels(ctx: &egui::Context, view: &PanelView, actions: &mut Vec<ViewerAction>) {
    egui::Window::new("Orientation")
        .title_bar(true)
        .resizable(false)
        .fixed_pos(egui::pos2(10.0, 10.0))
        .default_width(220.0)
        .show(ctx, |ui| hud_panel(ui, view));

    egui::Window::new("Playback")
        .resizable(false)
        .fixed_pos(egui::pos2(10.0, 170.0))
        .default_width(220.0)
        .show(ctx, |ui| playback_panel(ui, view.session, actions));

    egui::Window::new("Camera")
        .resizable(false)
        .fixed_pos(egui::pos2(10.0, 330.0))
        .default_width(220.0)
        .show(ctx, |ui| camera_panel(ui, view.session, actions));

    egui::Window::new("Data")
        .resizable(false)
        .default_pos(egui::pos2(260.0, 10.0))
        .show(ctx, |ui| data_panel(ui, view));
}

fn hud_panel(ui: &mut egui::Ui, view: &PanelView) {
    if let Some(message) = &view.hud.message {
        ui.label(message);
        return;
    }
    ui.label(
        egui::RichText::new(&view.hud.timestamp)
            .monospace()
            .color(egui::Color32::GRAY),
    );
    egui::Grid::new("hud_grid").num_columns(2).show(ui, |ui| {
        for (name, value) in [
            ("Pitch", &view.hud.pitch),
            ("Roll", &view.hud.roll),
            ("Yaw", &view.hud.yaw),
        ] {
            ui.label(name);
            ui.label(egui::RichText::new(value).monospace().size(16.0).color(HUD_COLOR));
            ui.end_row();
        }
    });
    ui.label(
        egui::RichText::new(format!("{:.0} FPS", view.fps))
            .size(11.0)
            .color(egui::Color32::GRAY),
    );
}

fn playback_panel(ui: &mut egui::Ui, session: &Session, actions: &mut Vec<ViewerAction>) {
    let clock = session.playback();
    let state = *clock.state();
    let enabled = clock.is_enabled();

    ui.horizontal(|ui| {
        let label = if state.playing { "Pause (P)" } else { "Play (P)" };
        if ui.add_enabled(enabled, egui::Button::new(label)).clicked() {
            actions.push(ViewerAction::TogglePlay);
        }
        if ui.add_enabled(enabled, egui::Button::new("◀")).clicked() {
            actions.push(ViewerAction::StepBackward);
        }
        if ui.add_enabled(enabled, egui::Button::new("▶")).clicked() {
            actions.push(ViewerAction::StepForward);
        }
    });

    let mut index = state.index;
    let last = clock.len().saturating_sub(1);
    let slider = egui::Slider::new(&mut index, 0..=last).text("sample");
    if ui.add_enabled(enabled, slider).changed() {
        actions.push(ViewerAction::Scrub(index));
    }

    let mut speed = state.speed;
    egui::ComboBox::from_label("speed")
        .selected_text(format!("{}x", state.speed))
        .show_ui(ui, |ui| {
            for choice in SPEED_CHOICES {
                ui.selectable_value(&mut speed, choice, format!("{}x", choice));
            }
        });
    if speed != state.speed {
        actions.push(ViewerAction::SetSpeed(speed));
    }
}

fn camera_panel(ui: &mut egui::Ui, session: &Session, actions: &mut Vec<ViewerAction>) {
    let rig = session.rig();
    let free = rig.mode() == CameraMode::FreeFly;

    ui.horizontal(|ui| {
        let label = if free { "Orbit camera (F)" } else { "Free camera (F)" };
        if ui.button(label).clicked() {
            actions.push(ViewerAction::ToggleFreeCamera);
        }
        if ui.button("Reset view (R)").clicked() {
            actions.push(ViewerAction::ResetView);
        }
    });

    ui.label(egui::RichText::new(format!("Mode: {:?}", rig.mode())).color(HEADING_COLOR));
    ui.label(format!("Pointer: {:?}", rig.capture()));
    let position = rig.camera().position;
    ui.label(format!(
        "Position: ({:.2}, {:.2}, {:.2})",
        position.x, position.y, position.z
    ));

    if free && rig.capture() == PointerCapture::Idle {
        ui.label(
            egui::RichText::new("Click the view to capture the pointer")
                .color(egui::Color32::from_rgb(255, 200, 100)),
        );
    } else if free {
        ui.label("WASD move, Space/Shift up/down, Esc releases");
    }
}

fn data_panel(ui: &mut egui::Ui, view: &PanelView) {
    ui.label(format!("Source: {}", view.source.unwrap_or("none")));
    ui.label(format!("Series: {:?}", view.series));
    ui.label(format!("Samples: {}", view.session.samples().len()));
}
