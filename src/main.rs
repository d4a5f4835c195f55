//! Scrimmage - Entry Point
//!
//! Interactive demo of the walkthrough overlay against a scripted battle
//! surface. Commands stand in for the real battle UI: playing cards, ending
//! turns, and scrolling all feed the same notification paths a host
//! interface would drive.

use clap::Parser;
use scrimmage::catalog::loader::load_catalog;
use scrimmage::catalog::step::{default_catalog, PanelZone};
use scrimmage::core::error::Result;
use scrimmage::core::types::{Rect, UiRegion};
use scrimmage::moves::registry::StaticMoveRegistry;
use scrimmage::overlay::anchor::ConnectorTracker;
use scrimmage::overlay::surface::{StaticSurface, UiSurface};
use scrimmage::walkthrough::sequencer::StepSequencer;

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Walkthrough overlay demo
#[derive(Parser, Debug)]
#[command(name = "scrimmage")]
#[command(about = "Drive the first-battle walkthrough from the terminal")]
struct Args {
    /// Catalog TOML file (defaults to the built-in first-battle tutorial)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Move table TOML file (defaults to the built-in starter table)
    #[arg(long)]
    moves: Option<PathBuf>,

    /// Player name substituted into step text
    #[arg(long, default_value = "Rookie")]
    player: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("scrimmage=debug")
        .init();

    let args = Args::parse();

    let steps = match &args.catalog {
        Some(path) => load_catalog(path)?,
        None => default_catalog(),
    };
    let registry = match &args.moves {
        Some(path) => StaticMoveRegistry::load(path)?,
        None => StaticMoveRegistry::starter(),
    };

    tracing::info!("Loaded {} walkthrough steps", steps.len());

    let surface = Arc::new(StaticSurface::new());
    place_battle_layout(&surface);

    let mut sequencer = StepSequencer::new(steps, Arc::new(registry), &args.player);
    sequencer.set_completion_handler(|| {
        println!("\n*** Walkthrough complete - the battle is yours now. ***");
    });

    let mut tracker = ConnectorTracker::mount(Arc::clone(&surface) as Arc<dyn UiSurface>);

    println!("\n=== SCRIMMAGE ===");
    println!("First-battle walkthrough demo");
    println!();
    println!("Commands:");
    println!("  play <card>   - Play a card (try: tackle, defend, focus, strike+)");
    println!("  end           - End your turn");
    println!("  enemy         - Let the enemy finish its turn");
    println!("  next          - Acknowledge the current step");
    println!("  skip          - Skip the current step, if allowed");
    println!("  scroll <dy>   - Scroll the battle view vertically");
    println!("  status / s    - Show walkthrough status");
    println!("  quit / q      - Exit");
    println!();

    while sequencer.is_active() {
        sync_overlay(&sequencer, &mut tracker, &surface);
        render_frame(&sequencer, &tracker);

        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim();
        let (command, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match command {
            "play" if !rest.is_empty() => {
                if !sequencer.notify_card_played(rest) {
                    println!("({rest} played, but the walkthrough wants something else)");
                }
            }
            "end" => {
                sequencer.notify_turn_ended();
            }
            "enemy" => {
                sequencer.notify_enemy_turn_done();
            }
            "next" | "n" => sequencer.advance(),
            "skip" => {
                if sequencer.view().can_skip {
                    sequencer.skip();
                } else {
                    println!("This step cannot be skipped.");
                }
            }
            "scroll" => {
                let dy: f32 = rest.parse().unwrap_or(40.0);
                surface.scroll_by(0.0, dy);
            }
            "status" | "s" => {
                println!(
                    "Step {}/{}, active={}",
                    sequencer.current_index(),
                    sequencer.step_count(),
                    sequencer.is_active()
                );
            }
            "quit" | "q" => break,
            "" => {}
            other => println!("Unknown command: {other}"),
        }
    }

    // Leaving the walkthrough releases every box subscription
    tracker.teardown();
    Ok(())
}

/// Screen boxes of the scripted battle, in a 1280x720 window
fn place_battle_layout(surface: &StaticSurface) {
    surface.place(UiRegion::Hand, Rect::new(280.0, 560.0, 1000.0, 700.0));
    surface.place(UiRegion::EnergyMeter, Rect::new(60.0, 580.0, 160.0, 680.0));
    surface.place(UiRegion::EndTurnButton, Rect::new(1080.0, 600.0, 1240.0, 660.0));
    surface.place(UiRegion::DrawPile, Rect::new(60.0, 440.0, 160.0, 540.0));
    surface.place(UiRegion::DiscardPile, Rect::new(1120.0, 440.0, 1220.0, 540.0));
    surface.place(UiRegion::EnemyBoard, Rect::new(700.0, 80.0, 1100.0, 320.0));
    surface.place(UiRegion::PlayerStatus, Rect::new(100.0, 80.0, 420.0, 200.0));
}

/// Re-place the panel for the step's zone and retarget the highlight
fn sync_overlay(
    sequencer: &StepSequencer,
    tracker: &mut ConnectorTracker,
    surface: &StaticSurface,
) {
    surface.place(UiRegion::TutorialPanel, panel_box_for(sequencer.zone()));
    tracker.set_target(sequencer.highlight());
    tracker.tick();
}

fn panel_box_for(zone: PanelZone) -> Rect {
    match zone {
        PanelZone::Primary => Rect::new(440.0, 240.0, 840.0, 400.0),
        PanelZone::Secondary => Rect::new(40.0, 240.0, 400.0, 400.0),
    }
}

fn render_frame(sequencer: &StepSequencer, tracker: &ConnectorTracker) {
    let view = sequencer.view();
    let Some(text) = view.step_text else { return };

    println!();
    println!("+--[ tutorial ]-----------------------------------");
    println!("| {text}");
    if view.can_skip {
        println!("| (type 'skip' to move on)");
    }
    println!("+-------------------------------------------------");

    match tracker.connector() {
        Some([p1, p2, p3]) => {
            let length = p1.distance(&p2) + p2.distance(&p3);
            println!(
                "connector: ({:.0},{:.0}) -> ({:.0},{:.0}) -> ({:.0},{:.0})  [{length:.0}px]",
                p1.x, p1.y, p2.x, p2.y, p3.x, p3.y
            );
        }
        None => {
            if view.highlight.is_some() {
                println!("connector: none (target missing or touching the panel)");
            }
        }
    }
}
