/// Interactive auction table: drive one negotiation from the keyboard and
/// watch the rival's patience and budget drain.
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use haggle_cli::format::format_money;
use haggle_core::{
    Actor, AuctionConfig, AuctionSetup, LogEntry, PlayerSkills, Resolution, RivalProfile, Strategy,
    TurnOutput,
};
use haggle_engine::{ActionError, BiddingEngine};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame, Terminal,
};
use std::{error::Error, io};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    Aggressive,
    Passive,
    Collector,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Aggressive => Strategy::Aggressive,
            StrategyArg::Passive => Strategy::Passive,
            StrategyArg::Collector => Strategy::Collector,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive auction table")]
struct Args {
    #[arg(long, default_value_t = 0)]
    seed: u64,

    #[arg(long, default_value_t = 20000)]
    valuation: u32,

    #[arg(long, default_value_t = 100000)]
    money: u32,

    #[arg(long, value_enum, default_value_t = StrategyArg::Aggressive)]
    strategy: StrategyArg,

    #[arg(long, default_value_t = 80)]
    interest: i32,

    #[arg(long, default_value_t = 100)]
    patience: i32,

    #[arg(long, default_value_t = 15000)]
    budget: u32,

    #[arg(long, default_value_t = 3)]
    inspection: u8,

    #[arg(long, default_value_t = 3)]
    tactics: u8,
}

struct App {
    engine: BiddingEngine,
    rng: StdRng,
    starting_budget: u32,
    log: Vec<LogEntry>,
    status: Option<String>,
    resolution: Option<Resolution>,
}

impl App {
    fn new(args: &Args) -> App {
        let setup = AuctionSetup {
            car_valuation: args.valuation,
            rival_profile: RivalProfile {
                name: "Rival".to_string(),
                strategy: args.strategy.into(),
                base_patience: args.patience,
                budget: args.budget,
            },
            interest: args.interest,
            player_skills: PlayerSkills {
                inspection: args.inspection,
                tactics: args.tactics,
            },
            player_money: args.money,
            config: AuctionConfig::default(),
        };
        let engine = BiddingEngine::new(setup);
        let starting_budget = engine.rival().budget;
        App {
            engine,
            rng: StdRng::seed_from_u64(args.seed),
            starting_budget,
            log: Vec::new(),
            status: None,
            resolution: None,
        }
    }

    fn accept(&mut self, output: TurnOutput) {
        self.log.extend(output.log);
        if let Some(resolution) = output.resolution {
            self.log.push(LogEntry::rival(resolution.message.clone()));
            self.resolution = Some(resolution);
            return;
        }
        // The engine never paces reveals; here we just show the rival's
        // answer immediately.
        if output.needs_rival_turn {
            match self.engine.rival_turn(&mut self.rng) {
                Ok(output) => self.accept(output),
                Err(_) => {}
            }
        }
    }

    fn apply(&mut self, result: Result<TurnOutput, ActionError>) {
        match result {
            Ok(output) => {
                self.status = None;
                self.accept(output);
            }
            Err(err) if !err.is_silent() => self.status = Some(err.to_string()),
            Err(_) => {}
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(&args);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err)
    }
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Esc => return Ok(()),
                KeyCode::Char('b') => {
                    let r = app.engine.player_bid(false);
                    app.apply(r);
                }
                KeyCode::Char('p') => {
                    let r = app.engine.player_bid(true);
                    app.apply(r);
                }
                KeyCode::Char('k') => {
                    let r = app.engine.player_kick_tires();
                    app.apply(r);
                }
                KeyCode::Char('s') => {
                    let r = app.engine.player_stall();
                    app.apply(r);
                }
                KeyCode::Char('q') => {
                    let r = app.engine.player_quit();
                    app.apply(r);
                }
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(4),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(size);

    let session = app.engine.session();
    let header_text = vec![
        Line::from(format!(
            "Car valued at {} | opening bid {}",
            format_money(session.car_valuation),
            format_money(session.opening_bid)
        )),
        Line::from(format!(
            "Current bid: {}  (high bidder: {}, stalls used: {}, next bid {}, power {})",
            format_money(session.current_bid),
            session.last_bidder,
            session.stall_uses,
            format_money(app.engine.preview_bid(false)),
            format_money(app.engine.preview_bid(true)),
        )),
    ];
    let header = Paragraph::new(header_text)
        .block(Block::default().borders(Borders::ALL).title("Auction"));
    f.render_widget(header, chunks[0]);

    let gauge_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(chunks[1]);
    let patience = app.engine.rival().patience.clamp(0, 100) as u16;
    let patience_gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Patience"))
        .gauge_style(Style::default().fg(if patience < 30 {
            Color::Red
        } else {
            Color::Green
        }))
        .percent(patience);
    f.render_widget(patience_gauge, gauge_chunks[0]);

    let budget = app.engine.rival().budget;
    let budget_ratio = if app.starting_budget == 0 {
        0.0
    } else {
        budget as f64 / app.starting_budget as f64
    };
    let budget_gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Budget"))
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(budget_ratio.clamp(0.0, 1.0))
        .label(format_money(budget));
    f.render_widget(budget_gauge, gauge_chunks[1]);

    let items: Vec<ListItem> = app
        .log
        .iter()
        .rev()
        .take(chunks[2].height.saturating_sub(2) as usize)
        .rev()
        .map(|entry| {
            let style = match entry.actor {
                Actor::Player => Style::default().fg(Color::Yellow),
                Actor::Rival => Style::default().fg(Color::White),
            };
            ListItem::new(Span::styled(entry.text.clone(), style))
        })
        .collect();
    let log = List::new(items).block(Block::default().borders(Borders::ALL).title("Log"));
    f.render_widget(log, chunks[2]);

    let footer_text = match (&app.resolution, &app.status) {
        (Some(resolution), _) => {
            let verdict = if resolution.player_won {
                "YOU WIN"
            } else {
                "YOU LOSE"
            };
            Line::from(Span::styled(
                format!("{}  (Esc to leave)", verdict),
                Style::default().add_modifier(Modifier::BOLD),
            ))
        }
        (None, Some(status)) => Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Red),
        )),
        (None, None) => Line::from("[b]id  [p]ower bid  [k]ick tires  [s]tall  [q]uit deal  Esc exit"),
    };
    let footer = Paragraph::new(footer_text).block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, chunks[3]);
}
