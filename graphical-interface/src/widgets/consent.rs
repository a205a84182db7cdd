use crate::permissions::{ConsentPrompt, PermissionResult};

const EXPLANATION: &str =
    "Ring Map uses your location to place a ring of markers around you on the map.";

/// The window asking the user for location access.
pub struct WidgetConsent;

impl WidgetConsent {
    /// Shows the question while `prompt` has a pending request and forwards
    /// the button the user pressed.
    pub fn show(ctx: &egui::Context, prompt: &mut ConsentPrompt) {
        if !prompt.is_pending() {
            return;
        }

        let mut answer = None;

        egui::Window::new("Location access")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.add_space(10.0);
                ui.label(egui::RichText::new(EXPLANATION).size(16.0));
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("Allow").clicked() {
                        answer = Some(PermissionResult::Granted);
                    }
                    if ui.button("Deny").clicked() {
                        answer = Some(PermissionResult::Denied);
                    }
                });
            });

        if let Some(answer) = answer {
            prompt.answer(answer);
        }
    }
}
