use data_loader::EventLog;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("source_data/tracks.csv");

    println!("Loading play log...\n");

    let start = Instant::now();
    let log = EventLog::load_from_file(path).expect("Failed to load play log");
    let elapsed = start.elapsed();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Listeners: {}", log.listener_count());
    println!("Events: {}", log.event_count());
    println!(
        "\nPerformance: {:.0} events/second",
        log.event_count() as f64 / elapsed.as_secs_f64()
    );
}
