//! Главный экран - список коммьюнити

use crate::app::App;
use eframe::egui;

impl App {
    pub fn render_communities_section(&mut self, ui: &mut egui::Ui) {
        let t = self.t();
        ui.heading(t.communities_title);
        ui.add_space(5.0);

        self.render_session_line(ui);

        ui.add_space(5.0);
        ui.separator();

        self.render_toolbar(ui);

        ui.add_space(10.0);
        self.render_communities_list(ui);
    }

    /// Строка с состоянием сессии и адресом API
    fn render_session_line(&mut self, ui: &mut egui::Ui) {
        let t = self.t();
        ui.horizontal(|ui| {
            match &self.session.user_id {
                Some(id) => {
                    ui.label(t.logged_in_as);
                    ui.label(egui::RichText::new(id).strong());
                }
                None => {
                    ui.colored_label(egui::Color32::GRAY, t.not_logged_in);
                }
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(egui::RichText::new(&self.config.api_url).monospace().weak());
            });
        });
    }

    fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        let t = self.t();

        // Строка 1: создание и обновление
        ui.horizontal(|ui| {
            if ui.button(t.create_new_community).clicked() {
                self.open_create_modal();
            }

            if ui
                .add_enabled(!self.communities_loading, egui::Button::new(t.refresh))
                .clicked()
            {
                self.refresh_communities();
            }
        });

        ui.add_space(5.0);

        // Строка 2: поиск по имени
        let t = self.t();
        ui.horizontal(|ui| {
            ui.label(t.search_label);
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.search_input)
                    .desired_width(220.0)
                    .hint_text(t.search_hint),
            );

            let enter_pressed =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            if ui.button(t.search_button).clicked() || enter_pressed {
                self.search_communities();
            }
        });
    }
}
