use log::{debug, info};
use voicecart_engine::{history_picks, seasonal_picks, substitute_picks, Outcome, Session};
use voicecart_interpreter::parse_command;
use voicecart_protocol::ParsedCommand;

use crate::remote::StateClient;

/// One interactive session: the in-memory list plus the best-effort link
/// to the persistence service. The session stays authoritative; the
/// backend only mirrors it.
pub struct App {
    session: Session,
    client: Option<StateClient>,
    backend_online: bool,
    last_item: Option<String>,
}

impl App {
    /// Load initial state from the backend, falling back to an empty local
    /// session when it is unreachable.
    pub async fn connect(client: Option<StateClient>) -> Self {
        let (session, backend_online) = match &client {
            Some(client) => match client.load().await {
                Ok(state) => {
                    info!(
                        "loaded state from server: {} items, {} history entries",
                        state.items.len(),
                        state.history.len()
                    );
                    println!("Loaded your list from the server.");
                    (Session::from_state(state), true)
                }
                Err(err) => {
                    debug!("state load failed, starting empty: {err}");
                    println!("Server unreachable; starting with an empty local list.");
                    (Session::new(), false)
                }
            },
            None => (Session::new(), false),
        };

        Self {
            session,
            client,
            backend_online,
            last_item: None,
        }
    }

    /// Print the welcome banner and seasonal picks.
    pub fn greet(&self) {
        println!("Speak a command: 'Add milk', 'Remove bread', 'Find apples under 5 dollars'.");
        let seasonal = seasonal_picks();
        if !seasonal.is_empty() {
            println!("Seasonal picks: {}", names(&seasonal));
        }
        self.print_list();
    }

    /// Interpret one transcript line and apply it. Returns whether the
    /// list or history changed (the caller schedules persistence).
    pub fn handle_transcript(&mut self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        // A leading '+' is the quick-add shortcut for a suggested item.
        let cmd = match text.strip_prefix('+') {
            Some(name) if !name.trim().is_empty() => ParsedCommand::quick_add(name.trim()),
            _ => parse_command(text),
        };
        debug!("parsed {:?} -> {cmd:?}", cmd.raw_text);

        let outcome = self.session.apply(&cmd);
        println!("{}", outcome.status());

        if let Outcome::SearchResults { matches, .. } = &outcome {
            for entry in matches {
                println!("  {} ({}) ${:.2}", entry.name, entry.brand, entry.price);
            }
        }

        self.last_item = cmd.item_name.clone();
        let mutated = outcome.mutated();
        if mutated {
            self.print_list();
            self.print_suggestions();
        }
        mutated
    }

    /// Best-effort flush to the backend. Failures are logged and swallowed;
    /// the in-memory session is never rolled back.
    pub async fn flush(&self) {
        if !self.backend_online {
            return;
        }
        let Some(client) = &self.client else {
            return;
        };
        match client.save(&self.session.state()).await {
            Ok(()) => debug!("state flushed to server"),
            Err(err) => debug!("state flush failed (keeping local state): {err}"),
        }
    }

    fn print_list(&self) {
        if self.session.items().is_empty() {
            println!("Your list is empty.");
            return;
        }
        println!("Shopping list:");
        for item in self.session.items() {
            println!("  {} x{} [{}]", item.name, item.quantity, item.category);
        }
    }

    fn print_suggestions(&self) {
        let history = history_picks(&self.session);
        if !history.is_empty() {
            println!("Often bought: {}", names(&history));
        }
        if let Some(item) = &self.last_item {
            let substitutes = substitute_picks(item);
            if !substitutes.is_empty() {
                println!("Alternatives to {item}: {}", names(&substitutes));
            }
        }
    }
}

fn names(suggestions: &[voicecart_protocol::Suggestion]) -> String {
    suggestions
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
