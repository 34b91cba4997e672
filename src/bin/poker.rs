use draw_poker::cards::Card;
use draw_poker::game::{Action, Game, Phase, Seat};
use draw_poker::view::TableView;
use std::io::{self, BufRead, Write};

/// Line-oriented console front-end: hands and totals print as they change,
/// and the prompt only offers actions the engine reports as legal.
struct ConsoleView;

impl TableView for ConsoleView {
    fn render_hand(&mut self, seat: Seat, cards: &[Card], face_down: bool) {
        let rendered: Vec<String> = if face_down {
            cards.iter().map(|_| "[??]".to_string()).collect()
        } else {
            cards.iter().map(|c| format!("[{c}]")).collect()
        };
        println!("{:>3}: {}", seat.label(), rendered.join(" "));
    }

    fn post_message(&mut self, text: &str, _append: bool) {
        println!("{text}");
    }

    fn update_totals(&mut self, pot: u64, player_credits: u64, bot_credits: u64) {
        println!("  pot {pot} | you {player_credits} | bot {bot_credits}");
    }
}

fn action_key(action: Action) -> &'static str {
    match action {
        Action::Deal => "deal",
        Action::Check => "check",
        Action::Bet => "bet",
        Action::Call => "call",
        Action::Fold => "fold",
        Action::Draw => "draw",
    }
}

fn prompt(choices: &[Action]) -> io::Result<String> {
    let keys: Vec<&str> = choices.iter().map(|&a| action_key(a)).collect();
    print!("[{}] (or quit) > ", keys.join("/"));
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_ascii_lowercase())
}

/// Read discard positions, e.g. `draw 1 3 5` for the first, third and fifth
/// card, or bare `draw` to stand pat.
fn parse_discards(input: &str) -> Option<Vec<usize>> {
    input
        .split_whitespace()
        .skip(1)
        .map(|tok| tok.parse::<usize>().ok().and_then(|n| n.checked_sub(1)))
        .collect()
}

fn main() -> io::Result<()> {
    println!("draw-poker {} - heads-up five-card draw", draw_poker::VERSION);
    let mut game = match std::env::args().nth(1).map(|arg| arg.parse::<u64>()) {
        Some(Ok(seed)) => Game::with_seed(ConsoleView, seed),
        Some(Err(_)) => {
            eprintln!("usage: draw-poker [seed]");
            return Ok(());
        }
        None => Game::new(ConsoleView),
    };

    loop {
        let choices = game.legal_actions();
        if choices.is_empty() {
            // Only the terminal phase offers nothing.
            break;
        }
        let input = prompt(&choices)?;
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "q" {
            break;
        }

        let result = match input.split_whitespace().next() {
            Some("deal") => game.deal(),
            Some("check") => game.action_check(),
            Some("bet") => game.action_bet(),
            Some("call") => game.action_call(),
            Some("fold") => game.action_fold(),
            Some("draw") if game.phase() == Phase::Drawing => match parse_discards(&input) {
                Some(discards) => game.action_draw(&discards),
                None => {
                    println!("draw takes card positions 1-5, e.g. `draw 1 3 5`");
                    continue;
                }
            },
            _ => {
                println!("unknown command: {input}");
                continue;
            }
        };
        if let Err(err) = result {
            println!("{err}");
        }
    }
    println!("Thanks for playing.");
    Ok(())
}
