// src/main.rs
//
// Calculatrice séquentielle — point d’entrée NATIF + WEB (WASM)
// ------------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
// - Journal                    : tracing (+ tracing-subscriber en natif)
//
// Côté WEB (WASM) : index.html contient le canvas :
//   <canvas id="the_canvas_id"></canvas>
//
// Structure projet:
// - `impl eframe::App for AppCalc` vit dans src/app.rs
// - le moteur (sans UI) vit dans src/noyau/
// - ici : point d’entrée seulement (natif + web)

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod config;
mod noyau;

use app::AppCalc;
use config::Config;

/* ------------------------ Journal (natif) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn installer_journal(cfg: &Config) {
    use tracing_subscriber::EnvFilter;

    // Filtre invalide => on retombe sur "info" plutôt que de refuser de démarrer.
    let filtre = EnvFilter::try_new(&cfg.filtre_journal).unwrap_or_else(|_| EnvFilter::new("info"));

    // try_init : un subscriber déjà posé (tests, hôte) n’est pas une erreur
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_target(false)
        .try_init();
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    let cfg = Config::depuis_env();
    installer_journal(&cfg);

    tracing::info!(titre = %cfg.titre, "démarrage natif");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(cfg.titre.as_str())
            .with_inner_size(cfg.taille)
            .with_min_inner_size(cfg.taille_min),
        ..Default::default()
    };

    eframe::run_native(
        &cfg.titre,
        options,
        Box::new(|_cc| Ok(Box::<AppCalc>::default())),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, Config};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let cfg = Config::default();

        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(&cfg.titre);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
