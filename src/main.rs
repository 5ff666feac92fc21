use anyhow::{Context, Result};
use pico_args::Arguments;
use serde::Deserialize;
use statusline_engine::*;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

#[derive(Debug)]
struct Args {
    theme: Option<String>,
    glyphs: Option<GlyphStyle>,
    config: Option<PathBuf>,
    width: Option<usize>,
    all: bool,
    help: bool,
}

impl Args {
    fn from_env() -> Result<Self> {
        let mut args = Arguments::from_env();

        Ok(Self {
            help: args.contains(["-h", "--help"]),
            all: args.contains("--all"),
            theme: args.opt_value_from_str("--theme")?,
            glyphs: args.opt_value_from_str("--glyphs")?,
            config: args
                .opt_value_from_str::<_, PathBuf>("--config")?
                .or_else(|| env::var("STATUSLINE_CONFIG").ok().map(PathBuf::from)),
            width: args.opt_value_from_str("--width")?,
        })
    }
}

/// Host state read from stdin.
#[derive(Debug, Deserialize)]
struct Snapshot {
    views: Vec<ViewSnapshot>,
    #[serde(default)]
    selected: Option<Surface>,
}

#[derive(Debug, Deserialize)]
struct ViewSnapshot {
    id: ViewId,
    document: Document,
    #[serde(default)]
    vc: Option<VcStatus>,
    #[serde(default)]
    diagnostics: Option<DiagnosticReport>,
}

/// Host backed by a one-shot snapshot.
struct SnapshotHost {
    documents: HashMap<ViewId, Document>,
    selected: Option<Surface>,
    status_format: Option<String>,
}

impl Host for SnapshotHost {
    type SavedFormat = Option<String>;

    fn document(&self, view: ViewId) -> Option<&Document> {
        self.documents.get(&view)
    }

    fn selected_surface(&self) -> Option<Surface> {
        self.selected
    }

    fn install_status_line(&mut self) -> Self::SavedFormat {
        self.status_format.replace("statusline".to_string())
    }

    fn restore_status_line(&mut self, saved: Self::SavedFormat) {
        self.status_format = saved;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    let args = Args::from_env()?;

    if args.help {
        print_help();
        return Ok(());
    }

    let mut config = config::load_config(args.config.clone()).await?;
    if let Some(theme) = args.theme.clone() {
        config.theme = theme;
    }
    if let Some(glyphs) = args.glyphs {
        config.glyphs = glyphs;
    }

    let mut input = String::new();
    tokio::io::stdin()
        .read_to_string(&mut input)
        .await
        .context("Failed to read host snapshot from stdin")?;
    let snapshot: Snapshot =
        serde_json::from_str(&input).context("Failed to parse host snapshot")?;

    let width = args
        .width
        .or(config.width)
        .or_else(|| env::var("COLUMNS").ok().and_then(|c| c.parse().ok()))
        .unwrap_or(80);

    for line in generate_statusline(&config, snapshot, width, args.all).await? {
        println!("{}", line);
    }

    Ok(())
}

async fn generate_statusline(
    config: &Config,
    snapshot: Snapshot,
    width: usize,
    all: bool,
) -> Result<Vec<String>> {
    let order: Vec<ViewId> = snapshot.views.iter().map(|view| view.id).collect();
    let host = SnapshotHost {
        documents: snapshot
            .views
            .iter()
            .map(|view| (view.id, view.document.clone()))
            .collect(),
        selected: snapshot.selected,
        status_format: None,
    };

    let mut engine = Engine::install(host, builtin_registry(config));

    for view in &snapshot.views {
        engine.dispatch(HostEvent::ViewOpened(view.id));
        match &view.vc {
            Some(status) => engine.dispatch(HostEvent::ExternalStatus {
                view: view.id,
                payload: StatusPayload::VersionControl(status.clone()),
            }),
            None => engine.dispatch(HostEvent::DocumentSaved(view.id)),
        }
        if let Some(report) = view.diagnostics {
            engine.dispatch(HostEvent::ExternalStatus {
                view: view.id,
                payload: StatusPayload::Diagnostics(report),
            });
        }
    }
    engine.settle().await;

    let views: Vec<ViewId> = if all {
        order
    } else {
        engine
            .current_active_view()
            .or_else(|| order.first().copied())
            .into_iter()
            .collect()
    };

    themes::configure_colors();
    let theme = themes::get_theme(&config.theme);
    Ok(views
        .into_iter()
        .map(|view| theme.paint(&engine.redraw(&config.layout, view, width)))
        .collect())
}

fn print_help() {
    println!("statusline - render editor status lines from a host snapshot");
    println!();
    println!("USAGE:");
    println!("    statusline [OPTIONS] < snapshot.json");
    println!();
    println!("OPTIONS:");
    println!("    --theme <THEME>        Theme: dark, light, nord, tokyo-night, rose-pine [default: dark]");
    println!("    --glyphs <STYLE>       Glyphs: unicode, ascii [default: unicode]");
    println!("    --config <FILE>        Custom config file path");
    println!("    --width <COLUMNS>      Line width [default: $COLUMNS or 80]");
    println!("    --all                  Render every view, not just the active one");
    println!("    -h, --help             Show this help message");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    STATUSLINE_THEME       Override theme");
    println!("    STATUSLINE_GLYPHS      Override glyph style");
    println!("    STATUSLINE_WIDTH       Override line width");
    println!("    STATUSLINE_CONFIG      Override config path");
    println!("    STATUSLINE_DEBUG       Enable debug logging");
    println!("    STATUSLINE_LOG         Log filter directives");
}
