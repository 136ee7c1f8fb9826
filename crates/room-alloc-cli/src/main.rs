// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use chrono::Utc;
use room_alloc_model::prelude::{PayloadLoadError, PayloadLoader, Problem};
use room_alloc_solver::prelude::GreedyAllocator;
use tracing_subscriber::EnvFilter;

// Diagnostics go to stderr so stdout stays a clean JSON stream.
fn enable_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Reads the payload from the path given as the first argument, or from
/// stdin when no path is given.
fn read_problem() -> Result<Problem, PayloadLoadError> {
    let loader = PayloadLoader::new();
    match std::env::args().nth(1) {
        Some(path) => {
            tracing::info!(path = %path, "reading payload from file");
            loader.from_path(path)
        }
        None => {
            tracing::info!("reading payload from stdin");
            loader.from_reader(std::io::stdin().lock())
        }
    }
}

fn main() {
    enable_tracing();
    let started = Utc::now();
    let t0 = std::time::Instant::now();

    let problem = match read_problem() {
        Ok(problem) => problem,
        Err(e) => {
            tracing::error!("failed to read input payload: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(
        queries = problem.queries().len(),
        rooms = problem.rooms().len(),
        has_range = problem.range().is_some(),
        "payload loaded"
    );

    let allocation = GreedyAllocator::new().allocate(problem);

    match allocation.to_json_pretty() {
        Ok(json) => println!("{json}"),
        Err(e) => {
            tracing::error!("failed to serialize allocation: {}", e);
            std::process::exit(1);
        }
    }

    tracing::info!(
        assigned = allocation.assigned_len(),
        unassigned = allocation.unassigned_len(),
        elapsed = ?t0.elapsed(),
        started = %started.to_rfc3339(),
        finished = %Utc::now().to_rfc3339(),
        "allocation complete"
    );
}
