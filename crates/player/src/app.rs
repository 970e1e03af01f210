//! Input loop and the background bot task.

use std::io::Write;
use std::time::Duration;

use anyhow::Context;
use chess_core::{sq_to_coord, MoveError};
use minimax_engine::{MinimaxEngine, RootDecision};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info};

use crate::board::BoardView;
use crate::command::{parse_command, Command, CommandError, HELP};
use crate::config::PlayerConfig;
use crate::session::{side_name, Session};

/// The searching engine comes back with its decision recorded.
type BotTask = JoinHandle<anyhow::Result<MinimaxEngine>>;

enum Flow {
    Continue,
    Quit,
}

pub struct App {
    session: Session,
    engine: MinimaxEngine,
    bot_delay: Duration,
    /// Bot search in flight, if any
    pending: Option<BotTask>,
}

impl App {
    pub fn new(session: Session, config: &PlayerConfig) -> anyhow::Result<Self> {
        let engine = MinimaxEngine::new(config.search).context("invalid search settings")?;
        Ok(Self {
            session,
            engine,
            bot_delay: Duration::from_millis(config.bot_delay_ms),
            pending: None,
        })
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        info!(
            engine = self.engine.name(),
            human = %self.session.human_color(),
            depth = self.engine.config().depth,
            "session started"
        );
        println!("Type 'help' for commands.");
        self.show_board();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            self.maybe_trigger_bot();
            if self.pending.is_none() {
                print!("> ");
                std::io::stdout().flush()?;
            }

            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line.context("failed to read input")? else {
                        break;
                    };
                    if let Flow::Quit = self.handle_line(&line) {
                        break;
                    }
                }
                reply = bot_reply(&mut self.pending) => {
                    self.pending = None;
                    self.on_bot_reply(reply)?;
                }
            }
        }
        self.cancel_bot();
        Ok(())
    }

    /// Starts the bot on a copy of the game when it is the bot's move.
    fn maybe_trigger_bot(&mut self) {
        if self.pending.is_some() || !self.session.is_bot_turn() {
            return;
        }
        println!("Bot is thinking...");

        let mut game = self.session.game.clone();
        let mut engine = self.engine.clone();
        let bot = self.session.bot_color();
        let delay = self.bot_delay;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let engine = tokio::task::spawn_blocking(move || {
                engine.play(&mut game, bot)?;
                Ok::<_, MoveError>(engine)
            })
            .await??;
            Ok::<_, anyhow::Error>(engine)
        }));
    }

    /// Drops a bot search whose position is no longer current.
    fn cancel_bot(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
            debug!("pending bot move discarded");
        }
    }

    fn on_bot_reply(
        &mut self,
        reply: Result<anyhow::Result<MinimaxEngine>, JoinError>,
    ) -> anyhow::Result<()> {
        self.engine = reply.context("bot task failed")??;
        let Some(decision) = self.engine.last_decision().copied() else {
            self.show_status();
            return Ok(());
        };
        self.session
            .apply_bot_move(decision.mv)
            .context("bot chose a move the game rejected")?;

        let san = self.session.game.san_history().pop().unwrap_or_default();
        println!("Bot plays {san} ({}).", decision.score);
        self.show_board();
        Ok(())
    }

    fn handle_line(&mut self, line: &str) -> Flow {
        let cmd = match parse_command(line) {
            Ok(cmd) => cmd,
            Err(CommandError::Empty) => return Flow::Continue,
            Err(e) => {
                println!("{e}");
                return Flow::Continue;
            }
        };

        match cmd {
            Command::Move(text) => match self.session.play_human(&text) {
                Ok(_) => self.show_board(),
                Err(e) => println!("{e}"),
            },
            Command::Moves(sq) => {
                let targets: Vec<String> =
                    self.session.select(sq).iter().map(|&t| sq_to_coord(t)).collect();
                if targets.is_empty() {
                    println!("No moves from {}.", sq_to_coord(sq));
                } else {
                    println!("{}", BoardView::new(&self.session).render());
                    println!("{} -> {}", sq_to_coord(sq), targets.join(" "));
                }
            }
            Command::NewGame => {
                self.cancel_bot();
                self.engine.new_game();
                let greeting = self.session.new_game();
                println!("{}", BoardView::new(&self.session).render());
                println!("{greeting}");
            }
            Command::ToggleBot => {
                let on = self.session.toggle_bot();
                if !on {
                    self.cancel_bot();
                }
                println!("Bot ON/OFF (Current: {})", if on { "ON" } else { "OFF" });
            }
            Command::Flip => {
                self.cancel_bot();
                let bottom = self.session.flip();
                println!("Orientation (Current: {})", side_name(bottom));
                self.show_board();
            }
            Command::Undo => {
                self.cancel_bot();
                match self.session.undo() {
                    0 => println!("Nothing to undo."),
                    _ => self.show_board(),
                }
            }
            Command::Eval => {
                println!(
                    "Evaluation for the bot ({}): {}",
                    side_name(self.session.bot_color()),
                    self.session.evaluation()
                );
                if let Some(last) = self.engine.last_decision() {
                    println!("{}", describe(last));
                }
            }
            Command::History => {
                let lines = self.session.history_lines();
                if lines.is_empty() {
                    println!("No moves yet.");
                }
                for line in lines {
                    println!("{line}");
                }
            }
            Command::Board => self.show_board(),
            Command::Help => println!("{HELP}"),
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn show_board(&self) {
        println!("{}", BoardView::new(&self.session).render());
        if let Some(mv) = self.session.last_move {
            println!("Last move: {mv}");
        }
        self.show_status();
    }

    fn show_status(&self) {
        println!("{}", self.session.status_text());
    }
}

fn describe(decision: &RootDecision) -> String {
    let mut text = format!(
        "Last bot search: {} scored {} over {} nodes",
        decision.mv, decision.score, decision.nodes
    );
    if decision.fallback {
        text.push_str(" (every move lost, took the first)");
    } else if decision.score.is_decisive() {
        text.push_str(" (forced result)");
    }
    text
}

/// Resolves with the bot's answer, or never when no search is running.
async fn bot_reply(
    pending: &mut Option<BotTask>,
) -> Result<anyhow::Result<MinimaxEngine>, JoinError> {
    match pending {
        Some(task) => task.await,
        None => std::future::pending().await,
    }
}
