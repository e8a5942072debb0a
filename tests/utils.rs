use overseer::{Annotation, Client, Gauge};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

pub const NUM_THREADS: u64 = 100;
pub const NUM_ITERATIONS: u64 = 1_000;

#[allow(dead_code)]
pub fn run_arc_threaded_test(client: Client, num_threads: u64, iterations: u64) {
    run_shared_threaded_test(Arc::new(client), num_threads, iterations);
}

#[allow(dead_code)]
pub fn run_shared_threaded_test(shared_client: Arc<Client>, num_threads: u64, iterations: u64) {
    let threads: Vec<_> = (0..num_threads)
        .map(|_| {
            let local_client = Arc::clone(&shared_client);

            thread::spawn(move || {
                for i in 0..iterations {
                    local_client
                        .gauge(&Gauge::new().with_name("some.gauge").with_value(i))
                        .unwrap();
                    local_client
                        .gauge(&Gauge::new().with_name("some.gauge").with_value(i as f64))
                        .unwrap();
                    local_client
                        .annotation(&Annotation::new().with_title("some.event").with_start_time(i))
                        .unwrap();
                    thread::sleep(Duration::from_millis(1));
                }
            })
        })
        .collect();

    for t in threads {
        t.join().unwrap();
    }
}
