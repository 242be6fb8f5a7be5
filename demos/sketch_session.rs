//! Test-Beispiel: komplette Sketch-Session mit Undo/Redo-Durchlauf.
//! Aufruf: cargo run --example sketch_session
//! Logging: RUST_LOG=debug cargo run --example sketch_session

use glam::Vec3;
use vr_sketch_engine::{
    AddControlPointContinuousCommand, CommandInvoker, OversketchCommand, PopulateGapCommand,
    SimplifyCommand, SketchCurve, SketchOptions, SketchWorld,
};

/// Simulierte Controller-Posen: flacher Bogen entlang Z, feiner gesampelt
/// als der Mindestabstand, damit der Continuous-Filter sichtbar greift.
fn controller_samples(count: usize) -> Vec<Vec3> {
    (0..count)
        .map(|i| {
            let t = i as f32 * 0.008;
            Vec3::new((t * 2.0).sin() * 0.3, 1.0 + (t * 0.9).cos() * 0.1, t)
        })
        .collect()
}

/// Referenzzug oberhalb der gezeichneten Kurve.
fn reference_stroke(length: f32) -> Vec<Vec3> {
    let count = (length / 0.1).ceil() as usize + 1;
    (0..count)
        .map(|i| Vec3::new(0.0, 1.35, i as f32 * 0.1))
        .collect()
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let options = SketchOptions::load_from_file(&SketchOptions::config_path());

    let mut world = SketchWorld::new();
    let mut invoker = CommandInvoker::new();
    let (curve_id, curve) = world.create_curve();

    // Zeichnen: Controller-Posen durch den Continuous-Filter schicken
    let samples = controller_samples(240);
    let mut accepted = 0usize;
    for sample in &samples {
        if invoker.execute_command(AddControlPointContinuousCommand::new(
            curve.clone(),
            *sample,
            options.continuous_min_sample_spacing,
        )) {
            accepted += 1;
        }
    }

    println!("=== VR-Sketch-Session ===");
    println!("Kurve #{} gezeichnet", curve_id);
    println!(
        "Controller-Samples:   {} (übernommen: {})",
        samples.len(),
        accepted
    );

    // Nachbearbeitung: auffüllen, an den Referenzzug ziehen, ausdünnen
    invoker.execute_command(PopulateGapCommand::new(
        curve.clone(),
        options.populate_min_spacing,
    )?);
    println!("Nach Populate:        {} Punkte", curve.borrow().points().len());

    let stroke = SketchCurve::shared_with_points(reference_stroke(1.92));
    invoker.execute_command(OversketchCommand::new(
        curve.clone(),
        stroke,
        options.oversketch_distance_scaling,
        options.oversketch_affected_range,
    )?);
    println!("Nach Oversketch:      {} Punkte", curve.borrow().points().len());

    invoker.execute_command(SimplifyCommand::new(
        curve.clone(),
        options.simplify_tolerance,
    )?);
    println!("Nach Simplify:        {} Punkte", curve.borrow().points().len());

    // Undo/Redo-Durchlauf über die Nachbearbeitungs-Schritte
    println!();
    println!("Historie:             {} Kommandos", invoker.len());

    invoker.undo();
    invoker.undo();
    invoker.undo();
    println!(
        "Nach 3x Undo:         {} Punkte (Redo möglich: {})",
        curve.borrow().points().len(),
        invoker.can_redo()
    );

    invoker.redo();
    invoker.redo();
    invoker.redo();
    println!(
        "Nach 3x Redo:         {} Punkte (Redo möglich: {})",
        curve.borrow().points().len(),
        invoker.can_redo()
    );

    // Registry: Kurve in den Papierkorb und wieder zurück
    world.destroy(curve_id);
    println!();
    println!(
        "Kurve #{} gelöscht    (im Papierkorb: {})",
        curve_id,
        world.is_deleted(curve_id)
    );
    world.restore(curve_id);
    println!(
        "Kurve #{} restauriert ({} Punkte, lebende Kurven: {})",
        curve_id,
        curve.borrow().points().len(),
        world.len()
    );

    Ok(())
}
