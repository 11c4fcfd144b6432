//! Общие виджеты UI

use crate::app::App;
use commu_desk::form::{Field, FieldErrors};
use commu_desk::utils::truncate_string;
use eframe::egui;

impl App {
    /// Отрисовать список коммьюнити
    pub fn render_communities_list(&mut self, ui: &mut egui::Ui) {
        let t = self.t();

        if self.communities_loading {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(t.loading_communities);
            });
            ui.add_space(5.0);
        }

        if self.communities.is_empty() {
            if !self.communities_loading {
                ui.colored_label(egui::Color32::GRAY, t.no_communities);
            }
            return;
        }

        let available_height = ui.available_height().max(100.0);

        egui::ScrollArea::vertical()
            .id_salt("communities_scroll")
            .max_height(available_height)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for community in &self.communities {
                    ui.group(|ui| {
                        ui.horizontal(|ui| {
                            ui.label(egui::RichText::new(&community.name).strong());
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    ui.weak(format!(
                                        "{} {}",
                                        t.created_by, community.creator.username
                                    ));
                                },
                            );
                        });

                        ui.label(truncate_string(&community.description, 120));

                        if !community.rules.trim().is_empty() {
                            ui.small(format!(
                                "{} {}",
                                t.rules_heading,
                                truncate_string(&community.rules, 80)
                            ));
                        }
                    });
                    ui.add_space(4.0);
                }
            });
    }
}

/// Строка с ошибкой валидации под полем формы
pub fn field_error_label(ui: &mut egui::Ui, errors: &FieldErrors, field: Field) {
    if let Some(message) = errors.get(&field) {
        ui.colored_label(egui::Color32::RED, format!("⚠ {}", message));
    }
}
