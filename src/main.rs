//! Target Rush entry point
//!
//! The browser build is driven from JavaScript through `target_rush::web`.
//! Natively this plays one headless round on autopilot, which is handy for
//! checking balance and logging changes without a browser.
//!
//! Usage: target-rush [username] [seed] [low|medium|high]

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use target_rush::consts::ROUND_TICKS;
    use target_rush::platform;
    use target_rush::sim::ShotOutcome;
    use target_rush::{GameSession, QualityPreset, Settings};

    env_logger::init();
    log::info!("Target Rush (native) starting...");

    let mut args = std::env::args().skip(1);
    let username = args.next().unwrap_or_else(|| "Autopilot".to_string());
    let seed = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(platform::clock_seed);
    let quality = match args.next() {
        Some(name) => QualityPreset::from_name(&name).unwrap_or_else(|| {
            log::warn!("Unknown quality {:?}, using medium", name);
            QualityPreset::Medium
        }),
        None => QualityPreset::Medium,
    };

    let mut session = GameSession::new(seed, Settings::from_preset(quality), platform::now_ms());
    if let Err(e) = session.start_round(&username) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
    log::info!("Seed {} quality {}", seed, quality.as_str());

    let mut misses = 0u32;
    for _ in 0..ROUND_TICKS {
        // Autopilot: face the closest target and shoot as soon as the gun is ready
        session.set_pointer_captured(true);
        let eye = session.state.player.pos;
        let target = session
            .state
            .enemies
            .iter()
            .map(|e| e.pos)
            .min_by(|a, b| a.distance_squared(eye).total_cmp(&b.distance_squared(eye)));
        if let Some(target) = target {
            session.state.player.look_at(target);
            if session.state.fire_cooldown == 0 && session.fire() == Some(ShotOutcome::Miss) {
                misses += 1;
            }
        }

        session.tick_at(platform::now_ms());
        for event in session.drain_events() {
            log::debug!("{:?}", event);
        }
    }

    let snap = session.snapshot(platform::now_ms());
    println!(
        "{}: score {} | hits {}/{} ({}%) | misses {} | max combo {}",
        snap.username, snap.score, snap.hits, snap.shots, snap.accuracy_percent, misses, snap.max_combo
    );
    match snap.last_rank {
        Some(rank) => println!("Leaderboard rank #{}", rank),
        None => println!("Did not make the leaderboard"),
    }
    for row in &snap.leaderboard {
        println!(
            "{:>2}. {:<12} {:>6} {:>4}%  {}",
            row.rank, row.username, row.score, row.accuracy_percent, row.when
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is target_rush::web, this is just to satisfy the compiler
}
