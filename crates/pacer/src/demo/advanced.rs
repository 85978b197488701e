use pacer_progress::{Postfix, Renderer, Tracker};
use tracing::trace;

use super::Demo;

pub const DOWNLOAD_TOTAL: u64 = 1024 * 1024 * 10;
pub const DOWNLOAD_CHUNK: u64 = 1024 * 100;

pub const CUSTOM_FORMAT: &str =
    "{desc}: {percentage:3.0f}%|{bar}| {n_fmt}/{total_fmt} [{elapsed}<{remaining}]";

pub fn process_files<R: Renderer>(demo: &Demo<'_, R>) {
    demo.section(1, "File Processing Simulation");
    let files: Vec<String> = (0..50).map(|i| format!("file_{i}.txt")).collect();

    let config = demo.config().desc("Processing files").unit("file");
    for file in demo.renderer.track(&files, config) {
        trace!(%file, "processing");
        demo.pace.sleep(50);
    }
}

/// Advances in fixed chunks, clipping the last one to what remains.
pub fn download_simulation<R: Renderer>(demo: &Demo<'_, R>) {
    demo.section(2, "Download Simulation (with byte units)");
    let config = demo
        .config()
        .desc("Downloading")
        .total(DOWNLOAD_TOTAL)
        .unit("B")
        .unit_scale(true)
        .unit_divisor(1024);
    let bar = demo.renderer.acquire(config);

    let mut downloaded = 0;
    while downloaded < DOWNLOAD_TOTAL {
        demo.pace.sleep(50);
        let chunk = DOWNLOAD_CHUNK.min(DOWNLOAD_TOTAL - downloaded);
        downloaded += chunk;
        bar.step(chunk);
    }
}

pub fn custom_format<R: Renderer>(demo: &Demo<'_, R>) {
    demo.section(3, "Custom Format Progress Bar");
    let config = demo.config().desc("Custom format").bar_format(CUSTOM_FORMAT);
    for _ in demo.renderer.track(0..100, config) {
        demo.pace.sleep(20);
    }
}

/// Simulated training metrics for an epoch: a decaying loss and an
/// accuracy capped at 99%.
pub fn metrics(epoch: u32) -> (f64, f64) {
    let loss = 1.0 / (f64::from(epoch) + 1.0);
    let accuracy = (f64::from(epoch) * 0.01).min(0.99);
    (loss, accuracy)
}

pub fn with_postfix<R: Renderer>(demo: &Demo<'_, R>) {
    demo.section(4, "Progress Bar with Postfix Stats");
    let bar = demo.renderer.acquire(demo.config().desc("Training").total(100));
    for epoch in 0..100 {
        let (loss, accuracy) = metrics(epoch);
        bar.set_postfix(
            Postfix::new()
                .field("loss", format!("{loss:.4}"))
                .field("accuracy", format!("{:.2}%", accuracy * 100.0)),
        );
        bar.step(1);
        demo.pace.sleep(30);
    }
}

pub fn run<R: Renderer>(demo: &Demo<'_, R>) {
    demo.banner("Pacer Advanced Demos");

    process_files(demo);
    download_simulation(demo);
    custom_format(demo);
    with_postfix(demo);

    demo.footer("All advanced demos completed!");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pace::Pace;
    use pacer_progress::{Event, Recorder, translate};

    fn recorded(routine: fn(&Demo<'_, Recorder>)) -> Recorder {
        let recorder = Recorder::new();
        routine(&Demo::new(&recorder, Pace::instant()));
        recorder
    }

    #[test]
    fn test_process_files_one_step_per_file() {
        let recorder = recorded(process_files);
        let (id, config) = recorder.acquired().remove(0);
        assert_eq!(config.unit, "file");
        assert_eq!(config.total, Some(50));
        assert_eq!(recorder.steps(id), vec![1; 50]);
    }

    #[test]
    fn test_download_chunks_sum_to_total() {
        let recorder = recorded(download_simulation);
        let (id, config) = recorder.acquired().remove(0);
        assert_eq!(config.unit, "B");
        assert!(config.unit_scale);
        assert_eq!(config.unit_divisor, 1024);

        let steps = recorder.steps(id);
        assert_eq!(steps.len() as u64, DOWNLOAD_TOTAL.div_ceil(DOWNLOAD_CHUNK));
        assert_eq!(steps.len(), 103);
        assert_eq!(steps.iter().sum::<u64>(), 10_485_760);
        assert_eq!(steps.last(), Some(&40_960));
    }

    #[test]
    fn test_custom_format_is_carried_and_valid() {
        let recorder = recorded(custom_format);
        let (_, config) = recorder.acquired().remove(0);
        assert_eq!(config.bar_format.as_deref(), Some(CUSTOM_FORMAT));
        assert!(translate(CUSTOM_FORMAT).is_ok());
    }

    #[test]
    fn test_metrics() {
        assert_eq!(metrics(0), (1.0, 0.0));
        let (loss, accuracy) = metrics(99);
        assert!((loss - 0.01).abs() < 1e-12);
        assert!((accuracy - 0.99).abs() < 1e-12);
        assert_eq!(metrics(500).1, 0.99);
    }

    #[test]
    fn test_postfix_attached_every_epoch() {
        let recorder = recorded(with_postfix);
        let postfixes: Vec<String> = recorder
            .events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Postfix { postfix, .. } => Some(postfix.to_string()),
                _ => None,
            })
            .collect();

        assert_eq!(postfixes.len(), 100);
        assert_eq!(postfixes[0], "loss=1.0000, accuracy=0.00%");
        assert_eq!(postfixes[1], "loss=0.5000, accuracy=1.00%");
        assert_eq!(postfixes[99], "loss=0.0100, accuracy=99.00%");
    }

    #[test]
    fn test_run_frames_output() {
        let recorder = recorded(run);
        let lines = recorder.lines();
        assert_eq!(lines[1], "Pacer Advanced Demos");
        assert_eq!(lines[lines.len() - 2], "All advanced demos completed!");
    }
}
