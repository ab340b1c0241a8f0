//! CLI entry point for dashboard-header
//!
//! Launches the GTK4 header, replays scripted scenarios against the
//! headless core, and prints the default configuration.

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand};
use colored::*;
use dashboard_header::config::{AlertSink, ConfigManager, HeaderConfig, DEFAULT_CONFIG_PATH};
use dashboard_header::core::{
    header::{NOTIFICATIONS, PROFILE},
    Header, HeaderDeps, ManualScheduler, OverlayController, Point, PointerEvent, Rect, RectRegion,
    SidebarState, ThemeState,
};
use dashboard_header::ui::App;
use std::path::PathBuf;
use std::rc::Rc;
use std::str::FromStr;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "dashboard-header")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the GTK4 header
    Gui {
        /// Path to the header configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Enable debug logging (honours RUST_LOG)
        #[arg(long)]
        debug: bool,
    },

    /// Replay a scripted scenario without a display and print the timeline
    ///
    /// Steps: trigger:<menu>, click:<menu>, click:outside, click:<x>,<y>,
    /// wait:<ms>, activate:<menu>:<index>, theme, sidebar
    Simulate {
        /// Path to the header configuration file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Enable debug logging (honours RUST_LOG)
        #[arg(long)]
        debug: bool,

        /// Steps to replay, in order
        #[arg(required = true)]
        steps: Vec<String>,
    },

    /// Print the default configuration as JSON
    DefaultConfig,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Gui { config, debug } => {
            dashboard_header::logging::init(debug);
            let config = load_config(config)?;
            App::new(config).run();
        }
        Commands::Simulate {
            config,
            debug,
            steps,
        } => {
            dashboard_header::logging::init(debug);
            let config = load_config(config)?;
            simulate(&config, &steps)?;
        }
        Commands::DefaultConfig => {
            println!("{}", HeaderConfig::default().to_json()?);
        }
    }

    Ok(())
}

fn load_config(path: PathBuf) -> anyhow::Result<HeaderConfig> {
    let manager = ConfigManager::new(path)?;
    let config = manager
        .load_or_default()
        .with_context(|| format!("Failed to load {}", manager.config_path().display()))?;
    Ok(config)
}

// Simulated layout: a 1000px wide header, 60px tall
const NOTIFICATIONS_TRIGGER: Rect = Rect {
    x: 880.0,
    y: 12.0,
    width: 36.0,
    height: 36.0,
};
const PROFILE_TRIGGER: Rect = Rect {
    x: 930.0,
    y: 12.0,
    width: 36.0,
    height: 36.0,
};
const DROPDOWN_WIDTH: f64 = 220.0;
const DROPDOWN_ROW_HEIGHT: f64 = 36.0;

/// What a simulated pointer goes down on
#[derive(Clone, Debug, PartialEq)]
enum ClickTarget {
    Menu(String),
    Outside,
    At(Point),
}

/// One scripted step
#[derive(Clone, Debug, PartialEq)]
enum Step {
    Trigger(String),
    Click(ClickTarget),
    Wait(Duration),
    Activate(String, usize),
    Theme,
    Sidebar,
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (verb, arg) = match s.split_once(':') {
            Some((verb, arg)) => (verb, Some(arg)),
            None => (s, None),
        };

        match (verb, arg) {
            ("theme", None) => Ok(Step::Theme),
            ("sidebar", None) => Ok(Step::Sidebar),
            ("trigger", Some(menu)) => Ok(Step::Trigger(menu_name(menu)?)),
            ("wait", Some(ms)) => {
                let ms: u64 = ms.parse().with_context(|| format!("Invalid wait '{}'", ms))?;
                Ok(Step::Wait(Duration::from_millis(ms)))
            }
            ("click", Some("outside")) => Ok(Step::Click(ClickTarget::Outside)),
            ("click", Some(target)) => match target.split_once(',') {
                Some((x, y)) => {
                    let x: f64 = x.trim().parse().with_context(|| format!("Invalid x '{}'", x))?;
                    let y: f64 = y.trim().parse().with_context(|| format!("Invalid y '{}'", y))?;
                    Ok(Step::Click(ClickTarget::At(Point::new(x, y))))
                }
                None => Ok(Step::Click(ClickTarget::Menu(menu_name(target)?))),
            },
            ("activate", Some(rest)) => {
                let (menu, index) = rest
                    .split_once(':')
                    .ok_or_else(|| anyhow!("Expected activate:<menu>:<index>, got '{}'", s))?;
                let index: usize = index
                    .parse()
                    .with_context(|| format!("Invalid item index '{}'", index))?;
                Ok(Step::Activate(menu_name(menu)?, index))
            }
            _ => bail!("Unknown step '{}'", s),
        }
    }
}

fn menu_name(name: &str) -> anyhow::Result<String> {
    match name {
        NOTIFICATIONS | PROFILE => Ok(name.to_string()),
        other => bail!("Unknown menu '{}' (expected {} or {})", other, NOTIFICATIONS, PROFILE),
    }
}

/// Dropdown area below a trigger, right-aligned to it
fn dropdown_rect(trigger: Rect, items: usize) -> Rect {
    Rect::new(
        trigger.x + trigger.width - DROPDOWN_WIDTH,
        trigger.y + trigger.height + 4.0,
        DROPDOWN_WIDTH,
        DROPDOWN_ROW_HEIGHT * items.max(1) as f64,
    )
}

/// Keeps a rect region in step with the overlay: the dropdown counts as
/// inside only while it is mounted
///
/// Call after the overlay's content is set.
fn track_dropdown(overlay: &OverlayController, region: Rc<RectRegion>, trigger: Rect) {
    let items = overlay.content().len();
    overlay.connect_changed(move |snapshot| {
        if snapshot.is_open_for_render() {
            region.set_rects(vec![trigger, dropdown_rect(trigger, items)]);
        } else {
            region.set_rects(vec![trigger]);
        }
    });
}

fn simulate(config: &HeaderConfig, raw_steps: &[String]) -> anyhow::Result<()> {
    let steps = raw_steps
        .iter()
        .map(|s| s.parse::<Step>())
        .collect::<anyhow::Result<Vec<_>>>()?;

    let scheduler = Rc::new(ManualScheduler::new());
    let sidebar = Rc::new(SidebarState::default());
    let notifications_region = Rc::new(RectRegion::new(NOTIFICATIONS_TRIGGER));
    let profile_region = Rc::new(RectRegion::new(PROFILE_TRIGGER));

    let header: Header = Header::new(
        HeaderDeps {
            theme: Rc::new(ThemeState::new(config.theme)),
            sidebar: sidebar.clone(),
            scheduler: scheduler.clone(),
            notifications_anchor: notifications_region.clone(),
            profile_anchor: profile_region.clone(),
        },
        config.overlay_options(),
    );

    let alerts: AlertSink = Rc::new(|message: &str| {
        println!("           {} {}", "!".yellow().bold(), message.yellow());
    });
    header.notifications().set_content(config.notifications_content(&alerts));
    header.profile().set_content(config.profile_content(&alerts));
    track_dropdown(header.notifications(), notifications_region, NOTIFICATIONS_TRIGGER);
    track_dropdown(header.profile(), profile_region, PROFILE_TRIGGER);

    println!(
        "{} Simulating {} step{} (leave animation {} ms)\n",
        "→".cyan(),
        steps.len(),
        if steps.len() == 1 { "" } else { "s" },
        config.leave_duration_ms
    );
    print_state(&scheduler, &header, "start");

    for (raw, step) in raw_steps.iter().zip(steps) {
        match step {
            Step::Trigger(menu) => overlay_named(&header, &menu)?.trigger(),
            Step::Click(target) => {
                let point = match target {
                    ClickTarget::Menu(menu) => match menu.as_str() {
                        NOTIFICATIONS => NOTIFICATIONS_TRIGGER.center(),
                        _ => PROFILE_TRIGGER.center(),
                    },
                    ClickTarget::Outside => Point::new(20.0, 400.0),
                    ClickTarget::At(point) => point,
                };
                let signalled = header.dispatch_pointer(&PointerEvent::down(point.x, point.y));
                if signalled > 0 {
                    println!(
                        "           {} {} overlay{} signalled",
                        "·".dimmed(),
                        signalled,
                        if signalled == 1 { "" } else { "s" }
                    );
                }
            }
            Step::Wait(duration) => {
                let fired = scheduler.advance(duration);
                if fired > 0 {
                    println!("           {} {} timer{} fired", "·".dimmed(), fired, if fired == 1 { "" } else { "s" });
                }
            }
            Step::Activate(menu, index) => {
                if let Err(e) = overlay_named(&header, &menu)?.activate_item(index) {
                    println!("           {} {}", "✗".red().bold(), e.to_string().red());
                }
            }
            Step::Theme => header.toggle_theme(),
            Step::Sidebar => header.toggle_sidebar(),
        }
        print_state(&scheduler, &header, raw);
    }

    println!(
        "\n{} theme {} (icon {}), sidebar {}, {} active registration{}",
        "✓".green(),
        header.theme().to_string().bold(),
        header.theme_icon().icon_name(),
        if sidebar.is_open() { "open" } else { "closed" },
        header.detector().registration_count(),
        if header.detector().registration_count() == 1 { "" } else { "s" }
    );

    Ok(())
}

fn overlay_named<'a>(header: &'a Header, name: &str) -> anyhow::Result<&'a OverlayController> {
    header
        .overlay(name)
        .ok_or_else(|| anyhow!("Unknown menu '{}'", name))
}

fn print_state(scheduler: &ManualScheduler, header: &Header, label: &str) {
    let describe = |overlay: &OverlayController| {
        let open = if overlay.is_open() {
            "open".green()
        } else {
            "closed".normal()
        };
        format!("{} {}/{}", overlay.id().to_string().cyan(), open, overlay.visibility())
    };

    println!(
        "{} {:<22} {}  {}",
        format!("[{:>5} ms]", scheduler.now().as_millis()).dimmed(),
        label.bold(),
        describe(header.notifications()),
        describe(header.profile()),
    );
}
