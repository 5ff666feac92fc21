use criterion::{black_box, criterion_group, criterion_main, Criterion};
use statusline_engine::*;
use std::collections::HashMap;

struct BenchHost {
    documents: HashMap<ViewId, Document>,
}

impl Host for BenchHost {
    type SavedFormat = ();

    fn document(&self, view: ViewId) -> Option<&Document> {
        self.documents.get(&view)
    }

    fn selected_surface(&self) -> Option<Surface> {
        Some(Surface::view(ViewId(1)))
    }

    fn install_status_line(&mut self) {}

    fn restore_status_line(&mut self, _saved: ()) {}
}

fn create_engine(views: u64) -> Engine<BenchHost> {
    let documents = (1..=views)
        .map(|id| {
            let mut document = Document::new(format!("file_{id}.rs"));
            document.modified = id % 2 == 0;
            document.line = 120;
            document.column = 8;
            document.total_lines = 400;
            document.mode = "Rust".to_string();
            document.cursors = Some(3);
            document.search = Some(SearchCounter {
                current: 2,
                total: 9,
            });
            (ViewId(id), document)
        })
        .collect();

    let mut engine = Engine::install(BenchHost { documents }, builtin_registry(&Config::default()));
    for id in 1..=views {
        engine.on_external_status(
            ViewId(id),
            StatusPayload::VersionControl(VcStatus {
                branch: Some("main".to_string()),
                state: VcState::Edited,
            }),
        );
        engine.on_external_status(
            ViewId(id),
            StatusPayload::Diagnostics(DiagnosticReport {
                state: CheckerState::Finished,
                errors: 0,
                warnings: 4,
                notes: 1,
            }),
        );
    }
    engine
}

fn bench_render(c: &mut Criterion) {
    let engine = create_engine(1);
    let layout = Config::default().layout;

    c.bench_function("render_default_layout", |b| {
        b.iter(|| black_box(engine.render(black_box(&layout), ViewId(1), black_box(120))))
    });
}

fn bench_redraw_many_views(c: &mut Criterion) {
    let mut engine = create_engine(50);
    let layout = Config::default().layout;

    c.bench_function("redraw_50_views", |b| {
        b.iter(|| {
            for id in 1..=50 {
                black_box(engine.redraw(&layout, ViewId(id), 120));
            }
        })
    });
}

fn bench_external_status(c: &mut Criterion) {
    let mut engine = create_engine(1);
    let payload = StatusPayload::VersionControl(VcStatus {
        branch: Some("feature/bench".to_string()),
        state: VcState::NeedsMerge,
    });

    c.bench_function("external_status_update", |b| {
        b.iter(|| engine.on_external_status(ViewId(1), black_box(payload.clone())))
    });
}

fn bench_paint(c: &mut Criterion) {
    let mut engine = create_engine(1);
    let config = Config::default();
    let theme = themes::get_theme(&config.theme);
    colored::control::set_override(true);

    let frame = engine.redraw(&config.layout, ViewId(1), 120);
    c.bench_function("paint_frame", |b| b.iter(|| black_box(theme.paint(black_box(&frame)))));
}

criterion_group!(
    benches,
    bench_render,
    bench_redraw_many_views,
    bench_external_status,
    bench_paint
);
criterion_main!(benches);
