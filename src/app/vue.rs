// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Un champ par variable, dans l’ordre où le calcul les demandera
// - Tactile : gros boutons, focus redonné après clic (focus_entree)

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::{to_postfix, Calculator, VariableError, VariableProvider};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice postfixe");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_variables(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 3 + 2 * (5 - x), s(a) ^ 2 + c(a) ^ 2")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        if resp.changed() {
            self.rafraichir_postfixe();
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(ui, "CLR", "Efface résultat + erreur", Action::ClearResultats);
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Précision :");
            let mut d = self.decimales as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=17)
                    .suffix(" décimales"),
            );
            if resp.changed() {
                self.set_decimales(d as usize);
            }
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            for (label, txt) in [("(", "("), (")", ")")] {
                self.bouton_insert(ui, label, txt);
            }
            for op in ["+", "-", "*", "/", "^"] {
                self.bouton_insert(ui, op, &format!(" {op} "));
            }

            ui.separator();

            self.bouton_insert(ui, "sin", "s(");
            self.bouton_insert(ui, "cos", "c(");

            ui.separator();

            self.bouton_insert(ui, "x", "x");
            self.bouton_insert(ui, "y", "y");

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(8.0);

        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"]] {
                    for chiffre in ligne {
                        self.bouton_insert(ui, chiffre, chiffre);
                    }
                    ui.end_row();
                }
                self.bouton_insert(ui, "0", "0");
                self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::Backspace);
                ui.end_row();
            });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_variables(&mut self, ui: &mut egui::Ui) {
        ui.label("Variables :");
        if self.variables.is_empty() {
            ui.monospace("aucune");
            return;
        }

        egui::Grid::new("variables")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                for champ in &mut self.variables {
                    ui.monospace(champ.nom.as_str());
                    ui.add(
                        egui::TextEdit::singleline(&mut champ.saisie)
                            .desired_width(160.0)
                            .hint_text("valeur")
                            .id_source(("variable", champ.nom.as_str())),
                    );
                    ui.end_row();
                }
            });
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 1);

        ui.add_space(6.0);

        ui.label("Postfixe :");
        Self::champ_monospace(ui, "postfixe_out", &self.postfixe, 1);

        ui.add_space(6.0);

        ui.label("Variables demandées :");
        Self::champ_monospace(ui, "demandees_out", &self.demandees.join(", "), 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => {
                    self.entree.pop();
                }
            }
            self.rafraichir_postfixe();
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, to_insert: &str) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.entree.push_str(to_insert);
            self.rafraichir_postfixe();
            self.focus_entree = true;
        }
    }

    /// Reconvertit l’entrée : postfixe affichée + champs de variables.
    /// Une entrée incomplète (parenthèse ouverte…) garde les champs précédents.
    fn rafraichir_postfixe(&mut self) {
        match to_postfix(&self.entree) {
            Ok(p) => {
                self.postfixe = p.to_string();
                self.sync_variables(&p.variables());
            }
            Err(_) => self.postfixe.clear(),
        }
    }

    /// Évalue l’expression ; les variables sont lues dans les champs saisis.
    fn eval_via_noyau(&mut self) {
        self.focus_entree = true;

        let s = self.entree.trim();
        if s.is_empty() {
            self.set_erreur("Entrée vide");
            return;
        }

        let calc = Calculator::new(s);
        let mut table = match self.table_variables() {
            Ok(t) => t,
            Err(e) => {
                self.set_erreur(e.to_string());
                return;
            }
        };
        tracing::debug!(saisies = table.len(), "variables saisies");

        let mut demandees: Vec<String> = Vec::new();
        let issue = {
            let mut fournisseur = |nom: &str| -> Result<f64, VariableError> {
                demandees.push(nom.to_string());
                table.request(nom)
            };
            calc.calculate(&mut fournisseur)
        };

        match issue {
            Ok(v) => {
                tracing::info!(expression = %calc.expression(), valeur = v, "calcul");
                self.set_resultat(v, demandees);
            }
            Err(e) => {
                tracing::warn!(expression = %calc.expression(), erreur = %e, "échec du calcul");
                self.set_erreur(e.to_string());
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}
