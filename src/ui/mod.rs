//! Модуль пользовательского интерфейса

mod communities_view;
mod create_modal;
mod widgets;

use crate::app::App;
use commu_desk::i18n::Language;
use eframe::egui;

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Обрабатываем события API
        self.process_events();

        // Обрабатываем результаты файловых диалогов
        self.process_dialog_results();

        // Перетаскивание файла в окно создания = выбор иконки
        self.handle_icon_drop(ctx);

        // Запрашиваем перерисовку пока идут фоновые запросы
        if self.communities_loading || self.modal_open {
            ctx.request_repaint_after(std::time::Duration::from_millis(500));
        }

        // Нижняя панель с логом (фиксированная высота)
        self.render_log_panel(ctx);

        // Основная панель (занимает оставшееся место)
        self.render_main_panel(ctx);

        // Модальное окно создания поверх основной панели
        self.render_create_modal(ctx);
    }
}

impl App {
    fn handle_icon_drop(&mut self, ctx: &egui::Context) {
        if !self.modal_open {
            return;
        }

        let dropped: Vec<_> = ctx.input(|i| {
            i.raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect()
        });

        for path in dropped {
            self.set_icon_from_path(path);
        }
    }

    fn render_log_panel(&mut self, ctx: &egui::Context) {
        let t = self.t();

        egui::TopBottomPanel::bottom("log_panel")
            .resizable(true)
            .min_height(60.0)
            .default_height(100.0)
            .max_height(300.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading(t.log);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button(t.clear).clicked() {
                            self.log_messages.clear();
                        }
                    });
                });

                egui::ScrollArea::vertical()
                    .id_salt("log_scroll")
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for msg in &self.log_messages {
                            ui.label(msg);
                        }
                        if self.log_messages.is_empty() {
                            ui.colored_label(egui::Color32::GRAY, t.log_empty);
                        }
                    });
            });
    }

    fn render_main_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            // Кнопки выбора языка вверху
            self.render_language_selector(ui);

            ui.separator();
            ui.add_space(5.0);

            self.render_communities_section(ui);
        });
    }

    fn render_language_selector(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("🌐");
            for lang in Language::all() {
                let text = format!("{} {}", lang.flag(), lang.native_name());
                let selected = self.language == *lang;

                if ui.selectable_label(selected, text).clicked() {
                    self.language = *lang;
                }
            }

            // Статус справа
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(&self.status_message);
            });
        });
    }
}
