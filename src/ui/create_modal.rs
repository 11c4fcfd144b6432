//! Модальное окно "Create New Community"

use super::widgets::field_error_label;
use crate::app::App;
use commu_desk::form::Field;
use commu_desk::utils::format_size;
use eframe::egui;

impl App {
    /// Отобразить модальное окно создания коммьюнити
    pub fn render_create_modal(&mut self, ctx: &egui::Context) {
        if !self.modal_open {
            return;
        }

        let t = self.t();
        let mut open = true;

        egui::Window::new(t.modal_title)
            .collapsible(false)
            .resizable(false)
            .default_width(420.0)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                self.render_modal_contents(ui);
            });

        // Закрытие крестиком: ввод сохраняется до следующего открытия
        if !open {
            self.close_create_modal();
        }
    }

    fn render_modal_contents(&mut self, ui: &mut egui::Ui) {
        let t = self.t();

        ui.label(t.modal_description);
        ui.add_space(10.0);

        // Название
        ui.label(t.label_name);
        ui.add(egui::TextEdit::singleline(&mut self.form.name).desired_width(f32::INFINITY));
        field_error_label(ui, &self.field_errors, Field::Name);
        ui.add_space(6.0);

        // Описание
        ui.label(t.label_description);
        ui.add(
            egui::TextEdit::multiline(&mut self.form.description)
                .desired_width(f32::INFINITY)
                .desired_rows(3),
        );
        field_error_label(ui, &self.field_errors, Field::Description);
        ui.add_space(6.0);

        // Иконка
        ui.label(t.label_icon);
        ui.horizontal(|ui| {
            if ui.button(t.choose_icon).clicked() {
                self.pick_icon_dialog();
            }

            match &self.form.icon {
                Some(icon) => {
                    ui.label(&icon.name);
                    ui.weak(format!("({})", format_size(icon.size())));
                }
                None => {
                    ui.colored_label(egui::Color32::GRAY, t.no_icon_selected);
                }
            }
        });
        field_error_label(ui, &self.field_errors, Field::Icon);
        ui.add_space(6.0);

        // Правила
        ui.label(t.label_rules);
        ui.add(
            egui::TextEdit::multiline(&mut self.form.rules)
                .desired_width(f32::INFINITY)
                .desired_rows(3)
                .hint_text(t.rules_hint),
        );
        field_error_label(ui, &self.field_errors, Field::Rules);

        // Общая ошибка отправки
        if let Some(error) = &self.general_error {
            ui.add_space(8.0);
            ui.colored_label(egui::Color32::RED, format!("⚠ {}", error));
        }

        ui.add_space(12.0);
        ui.separator();

        ui.horizontal(|ui| {
            if ui.button(t.create_community).clicked() {
                self.submit_create();
            }
            if ui.button(t.cancel).clicked() {
                self.close_create_modal();
            }
        });
    }
}
