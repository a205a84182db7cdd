use std::time::{Duration, Instant};

/// A short message shown at the bottom of the window for a fixed time.
pub struct WidgetNotice {
    message: String,
    shown_at: Instant,
    duration: Duration,
}

impl WidgetNotice {
    pub fn new(message: &str, duration: Duration) -> Self {
        Self {
            message: message.to_string(),
            shown_at: Instant::now(),
            duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= self.duration
    }

    /// Draws the notice. Returns `false` once it has expired.
    pub fn show(&self, ctx: &egui::Context) -> bool {
        if self.is_expired() {
            return false;
        }

        egui::Area::new("notice".into())
            .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -40.0])
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.label(egui::RichText::new(self.message.as_str()).size(16.0));
                });
            });

        ctx.request_repaint_after(self.duration.saturating_sub(self.shown_at.elapsed()));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_expires() {
        assert!(WidgetNotice::new("gone", Duration::ZERO).is_expired());
        assert!(!WidgetNotice::new("still here", Duration::from_secs(60)).is_expired());
    }
}
