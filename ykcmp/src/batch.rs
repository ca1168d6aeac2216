use std::{panic, sync::atomic::{AtomicUsize, Ordering}, thread};
use tracing::debug;
use crate::{container::{Container, Decompressed}, error::Error, options::DecodeOptions};

/// Decompresses many independent containers across all cores.
///
/// Each element of `hosts` must start with a container header. Results are in the same order as
/// `hosts`.
pub fn decompress_all(hosts: &[&[u8]], options: &DecodeOptions) -> Vec<Result<Decompressed, Error>> {
	let worker_count = num_cpus::get().clamp(1, hosts.len().max(1));
	debug!(containers = hosts.len(), workers = worker_count, "starting batch decode");
	let next = &AtomicUsize::new(0);
	thread::scope(|scope| {
		let workers = (0..worker_count).map(|_| scope.spawn(move || {
			let mut done = Vec::new();
			loop {
				let i = next.fetch_add(1, Ordering::Relaxed);
				let Some(host) = hosts.get(i) else {
					break done;
				};
				let result = Container::parse(host)
					.map_err(Error::from)
					.and_then(|container| container.decompress(options));
				done.push((i, result));
			}
		})).collect::<Vec<_>>();

		let mut results = hosts.iter().map(|_| None).collect::<Vec<_>>();
		for worker in workers {
			match worker.join() {
				Ok(done) => for (i, result) in done {
					results[i] = Some(result);
				},
				Err(payload) => panic::resume_unwind(payload)
			}
		}
		// every index below hosts.len() is handed out exactly once
		results.into_iter().flatten().collect()
	})
}
