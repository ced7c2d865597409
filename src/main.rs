//! framemeta demo - pose metadata loopback & benchmark
//!
//! Alur:
//! - Capture thread: sample pose -> encode ke metadata frame -> kirim ke channel
//! - Render thread: terima frame -> decode metadata -> rekonstruksi pose
//!
//! Usage:
//!   cargo run --release -- [OPTIONS]

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, TrySendError};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use log::{debug, info, warn};

use framemeta::frame::VideoFrame;
use framemeta::pose::{CameraPose, PoseLayout};
use framemeta::protocol::{self, Decoder, Encoder};

/// Kedalaman channel capture -> render (frame)
const CHANNEL_DEPTH: usize = 1024;

/// Demo configuration
struct DemoConfig {
    iterations: usize,
    frames: u64,
    layout: PoseLayout,
    verbose: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            iterations: 1_000_000,
            frames: 100_000,
            layout: PoseLayout::WithProjection,
            verbose: false,
        }
    }
}

fn main() {
    env_logger::init();
    let config = parse_args();

    println!("📐 framemeta - Pose Metadata Codec");
    println!("==================================\n");

    benchmark_codec(&config);
    benchmark_pose(&config);
    run_loopback(&config);

    println!("\n✅ All benchmarks complete!");
}

/// Pose sintetis: kamera berputar mengelilingi origin
fn sample_pose(i: u64, layout: PoseLayout) -> CameraPose {
    let t = i as f32 * 0.001;
    let pose = CameraPose::new([t.cos(), 1.5, t.sin()], [0.0, t, 0.0]);
    match layout {
        PoseLayout::WithProjection => pose.with_projection(0.001, 1.0472),
        PoseLayout::Basic => pose,
    }
}

fn benchmark_codec(config: &DemoConfig) {
    println!("📊 Codec Benchmark (f32 x 8)");
    println!("----------------------------");

    let values = [0.25f32, -1.5, 3.0, 0.1, 0.2, -0.3, 0.001, 1.0472];
    let mut encoder = Encoder::new(64);

    let start = Instant::now();
    for _ in 0..config.iterations {
        if let Err(e) = encoder.encode(std::hint::black_box(&values[..])) {
            warn!("encode failed: {}", e);
            return;
        }
    }
    let encode_duration = start.elapsed();

    let bytes = encoder.as_bytes().to_vec();
    let start = Instant::now();
    let mut checksum = 0f32;
    for _ in 0..config.iterations {
        for value in Decoder::<f32>::new(std::hint::black_box(&bytes)) {
            checksum += value;
        }
    }
    let decode_duration = start.elapsed();
    debug!("decode checksum: {}", checksum);

    let encode_ns = encode_duration.as_nanos() as f64 / config.iterations as f64;
    let decode_ns = decode_duration.as_nanos() as f64 / config.iterations as f64;

    println!("  Buffer size: {} bytes", bytes.len());
    println!("  Operations: {}", config.iterations);
    println!("  Encode latency: {:.2} ns/op", encode_ns);
    println!("  Decode latency: {:.2} ns/op", decode_ns);
    println!(
        "  Encode throughput: {:.2} M ops/sec\n",
        config.iterations as f64 / encode_duration.as_secs_f64() / 1_000_000.0
    );
}

fn benchmark_pose(config: &DemoConfig) {
    println!("📊 Pose Record Benchmark ({:?})", config.layout);
    println!("------------------------------------------");

    let mut frame = VideoFrame::new(1280, 720, 0);
    let mut failures = 0usize;

    let start = Instant::now();
    for i in 0..config.iterations {
        let pose = sample_pose(i as u64, config.layout);
        let mut buf = [0u8; 32];
        let attached = pose
            .encode_into(&mut buf)
            .and_then(|n| frame.set_metadata(&buf[..n]));
        if attached.is_err() {
            failures += 1;
        }
    }
    let attach_duration = start.elapsed();

    let start = Instant::now();
    for _ in 0..config.iterations {
        let decoded = frame.metadata().map(CameraPose::decode);
        if !matches!(decoded, Some(Ok(_))) {
            failures += 1;
        }
    }
    let decode_duration = start.elapsed();

    println!(
        "  Record size: {} bytes",
        protocol::encoded_len::<f32>(config.layout.element_count())
    );
    println!(
        "  Attach latency: {:.2} ns/op",
        attach_duration.as_nanos() as f64 / config.iterations as f64
    );
    println!(
        "  Decode latency: {:.2} ns/op",
        decode_duration.as_nanos() as f64 / config.iterations as f64
    );
    if failures > 0 {
        println!("  Failures: {} ⚠️", failures);
    }
    println!();
}

/// Capture -> channel -> render dalam satu proses
fn run_loopback(config: &DemoConfig) {
    println!("📊 Loopback (capture thread -> render thread)");
    println!("---------------------------------------------");

    let (tx, rx) = mpsc::sync_channel::<VideoFrame>(CHANNEL_DEPTH);
    let dropped = Arc::new(AtomicU64::new(0));

    let capture = {
        let dropped = Arc::clone(&dropped);
        let frames = config.frames;
        let layout = config.layout;
        thread::spawn(move || {
            for i in 0..frames {
                let mut frame = VideoFrame::new(1280, 720, i);
                let pose = sample_pose(i, layout);
                if let Err(e) = frame.attach(pose.to_elements().as_slice()) {
                    warn!("frame {}: {}", i, e);
                    continue;
                }

                // Frame lama lebih baik di-drop daripada menahan capture
                match tx.try_send(frame) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        dropped.fetch_add(1, Ordering::Relaxed);
                    }
                    Err(TrySendError::Disconnected(_)) => break,
                }
            }
        })
    };

    let start = Instant::now();
    let mut received = 0u64;
    let mut last_pose = None;
    // Loop selesai saat capture thread selesai dan sender di-drop
    for frame in rx {
        received += 1;
        match frame.metadata().map(CameraPose::decode) {
            Some(Ok(pose)) => last_pose = Some(pose),
            Some(Err(e)) => warn!("frame {}: {}", frame.timestamp_ns, e),
            None => debug!("frame {} has no metadata", frame.timestamp_ns),
        }
    }
    let duration = start.elapsed();

    if capture.join().is_err() {
        warn!("capture thread panicked");
    }

    info!("loopback finished in {:?}", duration);
    println!("  Frames sent:     {}", config.frames);
    println!("  Frames received: {}", received);
    println!(
        "  Frames dropped:  {}",
        dropped.load(Ordering::Relaxed)
    );
    println!(
        "  Throughput:      {:.2} K frames/sec",
        received as f64 / duration.as_secs_f64() / 1_000.0
    );
    if let Some(pose) = last_pose {
        if config.verbose {
            println!("\n  Last pose:\n{}", pose);
        }
    }
}

fn parse_args() -> DemoConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut config = DemoConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--iterations" | "-n" => {
                if i + 1 < args.len() {
                    config.iterations = args[i + 1].parse().unwrap_or(1_000_000);
                    i += 1;
                }
            }
            "--frames" | "-f" => {
                if i + 1 < args.len() {
                    config.frames = args[i + 1].parse().unwrap_or(100_000);
                    i += 1;
                }
            }
            "--basic" => {
                config.layout = PoseLayout::Basic;
            }
            "--verbose" | "-v" => {
                config.verbose = true;
            }
            "--help" | "-h" => {
                println!("framemeta - Pose Metadata Codec Demo\n");
                println!("Usage: framemeta [OPTIONS]\n");
                println!("Options:");
                println!("  -n, --iterations <N>  Codec benchmark iterations (default: 1000000)");
                println!("  -f, --frames <N>      Loopback frame count (default: 100000)");
                println!("      --basic           Send 6-float poses (no projection)");
                println!("  -v, --verbose         Print the last received pose");
                println!("  -h, --help            Show this help");
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}
