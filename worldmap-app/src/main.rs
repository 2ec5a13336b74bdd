use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use worldmap::{
    InputEvent, Marker, PropertiesGeometrySource, RegionCatalog, WorldMap, WorldMapBuilder,
    WorldMapUiExt,
};

const DEFAULT_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

/// Usage:
///   worldmap-app [DATA_DIR]                       open the viewer
///   worldmap-app --headless [DATA_DIR] [SCRIPT]   print the draw commands as JSON
fn main() -> Result<()> {
    worldmap::init_logging();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let headless = match args.first().map(String::as_str) {
        Some("--headless") => {
            args.remove(0);
            true
        }
        Some("--help") | Some("-h") => {
            println!("worldmap-app [--headless] [DATA_DIR] [SCRIPT]");
            return Ok(());
        }
        _ => false,
    };

    let data_dir = PathBuf::from(args.first().map(String::as_str).unwrap_or(DEFAULT_DATA_DIR));
    let map = load_map(&data_dir)?;

    if headless {
        let script = args
            .get(1)
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join("script.json"));
        run_headless(map, &script)
    } else {
        run_viewer(map)
    }
}

fn load_map(data_dir: &Path) -> Result<WorldMap> {
    let catalog_path = data_dir.join("catalog.json");
    let catalog = match std::fs::read_to_string(&catalog_path) {
        Ok(text) => RegionCatalog::from_json(&text)
            .with_context(|| format!("parsing {}", catalog_path.display()))?,
        Err(e) => {
            log::warn!("No catalog at {}: {}", catalog_path.display(), e);
            RegionCatalog::default()
        }
    };

    let mut map = WorldMapBuilder::new()
        .with_geometry_source(PropertiesGeometrySource::from_dir(data_dir))
        .with_catalog(catalog)
        .with_selection(true)
        .with_zoom(true)
        .build();
    if let Some(warning) = map.load_warning() {
        bail!("no region geometry in {}: {}", data_dir.display(), warning);
    }

    map.add_markers([
        Marker::new("bern", 46.95, 7.45)
            .with_name("Bern")
            .with_info("Switzerland"),
        Marker::new("sydney", -33.87, 151.21).with_name("Sydney"),
        Marker::new("rio", -22.91, -43.17).with_info("Rio de Janeiro"),
    ]);
    map.on_region_release(|event| log::info!("Released {}", event.region));
    Ok(map)
}

fn run_headless(mut map: WorldMap, script: &Path) -> Result<()> {
    let text = std::fs::read_to_string(script)
        .with_context(|| format!("reading {}", script.display()))?;
    let events: Vec<InputEvent> =
        serde_json::from_str(&text).with_context(|| format!("parsing {}", script.display()))?;

    map.attach();
    for event in events {
        map.handle_event(event)?;
        map.tick();
    }

    let commands = map.drain_commands();
    println!("{}", serde_json::to_string_pretty(&commands)?);
    log::info!(
        "{} commands, selected {:?}, scale {:.2}",
        commands.len(),
        map.selected_region(),
        map.scale_factor()
    );
    Ok(())
}

fn run_viewer(map: WorldMap) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("worldmap"),
        ..Default::default()
    };

    eframe::run_native(
        "worldmap-app",
        options,
        Box::new(|_cc| Box::new(ViewerApp { map })),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {}", e))
}

struct ViewerApp {
    map: WorldMap,
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls").show(ctx, |ui| {
            let mut hover = self.map.is_hover_enabled();
            if ui.checkbox(&mut hover, "Hover").changed() {
                self.map.set_hover_enabled(hover);
            }
            let mut selection = self.map.is_selection_enabled();
            if ui.checkbox(&mut selection, "Selection").changed() {
                self.map.set_selection_enabled(selection);
            }
            let mut zoom = self.map.is_zoom_enabled();
            if ui.checkbox(&mut zoom, "Zoom").changed() {
                self.map.set_zoom_enabled(zoom);
            }
            let mut markers = self.map.markers().is_visible();
            if ui.checkbox(&mut markers, "Markers").changed() {
                self.map.show_markers(markers);
            }

            ui.separator();
            if ui.button("Reset zoom").clicked() {
                self.map.reset_zoom();
            }
            let mut groups: Vec<String> =
                self.map.catalog().group_names().map(str::to_string).collect();
            groups.sort();
            for group in groups {
                if ui.button(format!("Zoom to {}", group)).clicked() {
                    if let Err(e) = self.map.zoom_to_group(&group) {
                        log::warn!("{}", e);
                    }
                }
            }

            ui.separator();
            ui.label(format!("Scale: {:.2}", self.map.scale_factor()));
            match self.map.selected_region() {
                Some(region) => ui.label(format!("Selected: {}", region)),
                None => ui.label("Selected: none"),
            };
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.world_map(&mut self.map);
        });
    }
}
