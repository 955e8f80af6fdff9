//! User-facing text for the menu and game shell.

pub const MENU_PROMPT: &str =
    "\nEnter 1 to start a new game, 2 to view past games, 3 to view statistics, 9 to exit.\n";
pub const INVALID_MENU: &str = "Invalid input. Enter 1, 2, 3 or 9.";

pub const BUDGET_PROMPT: &str = "\nHow many attempts do you need to beat the computer?\n";
pub const SECRET_DRAWN: &str = "\nThe computer has picked a number.\n";
pub const GUESS_PROMPT: &str = "Enter your guess: ";
pub const GAME_OVER: &str = "------- Game over -------";

pub const NO_GAMES_YET: &str = "\nNo games have been played yet.\n";
pub const HISTORY_END: &str = "------- End of records -------";

pub const GOODBYE: &str = "\nThe application has exited.";
