#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use amazons::{init_logging, Board, GameEngine, GameStatus, Pos, SquareState, TurnError};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use std::io::{self, Write};

#[derive(Parser)]
#[command(author, version, about = "Game of the Amazons on the terminal", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play on the tournament-standard 10x10 board.
    Standard,
    /// Play on a custom board with an explicit piece layout.
    Custom {
        #[arg(long, default_value_t = 10)]
        width: i32,
        #[arg(long, default_value_t = 10)]
        height: i32,
        #[arg(
            long = "white",
            value_parser = parse_pos,
            required = true,
            help = "White starting square as x,y (repeatable)"
        )]
        white: Vec<Pos>,
        #[arg(
            long = "black",
            value_parser = parse_pos,
            required = true,
            help = "Black starting square as x,y (repeatable)"
        )]
        black: Vec<Pos>,
    },
}

#[cfg(feature = "std")]
fn parse_pos(input: &str) -> Result<Pos, String> {
    let (x, y) = input
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{}'", input))?;
    let x = x.trim().parse().map_err(|_| format!("bad x coordinate '{}'", x))?;
    let y = y.trim().parse().map_err(|_| format!("bad y coordinate '{}'", y))?;
    Ok(Pos::new(x, y))
}

#[cfg(feature = "std")]
fn print_board(board: &Board) {
    print!("   ");
    for x in 0..board.width() {
        print!(" {}", x % 10);
    }
    println!();
    for y in 0..board.height() {
        print!("{:2} ", y);
        for x in 0..board.width() {
            let ch = match board.square_state(Pos::new(x, y)) {
                Some(SquareState::Arrow) => 'x',
                Some(SquareState::White) => 'W',
                Some(SquareState::Black) => 'B',
                _ => '.',
            };
            print!(" {}", ch);
        }
        println!();
    }
}

#[cfg(feature = "std")]
fn prompt_square(prompt: &str) -> anyhow::Result<Pos> {
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            anyhow::bail!("input closed");
        }
        let mut parts = line.split_whitespace();
        let x = parts.next().and_then(|t| t.parse().ok());
        let y = parts.next().and_then(|t| t.parse().ok());
        if let (Some(x), Some(y)) = (x, y) {
            return Ok(Pos::new(x, y));
        }
        println!("Enter two numbers, e.g. '3 0'");
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();
    let mut engine = match cli.command.unwrap_or(Commands::Standard) {
        Commands::Standard => GameEngine::standard(),
        Commands::Custom {
            width,
            height,
            white,
            black,
        } => GameEngine::new(width, height, &white, &black).map_err(|e| anyhow::anyhow!(e))?,
    };

    println!("Game of the Amazons!");
    while engine.status() == GameStatus::InProgress {
        println!("\n------");
        println!("{} to move", engine.current_player());
        print_board(engine.board());

        let src = prompt_square("Enter amazon position [x y]: ")?;
        let dst = prompt_square("Enter destination square [x y]: ")?;
        let shot = prompt_square("Enter shot square [x y]: ")?;
        match engine.take_turn(src, dst, shot) {
            Ok(GameStatus::Finished {
                white_territory,
                black_territory,
                ..
            }) => {
                println!(
                    "The board has been divided. White controls {} squares. \
                     Black controls {} squares.",
                    white_territory, black_territory
                );
            }
            Ok(GameStatus::InProgress) => {}
            Err(TurnError::InvalidShot) => println!("Invalid shot"),
            Err(e) => println!("{}", e),
        }
    }

    println!();
    print_board(engine.board());
    if let GameStatus::Finished { winner, .. } = engine.status() {
        println!("{} wins!", winner);
    }
    Ok(())
}
