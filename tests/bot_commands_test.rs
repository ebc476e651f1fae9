//! Command recognition over the raw text Telegram delivers.

use pretty_assertions::assert_eq;
use teloxide::utils::command::BotCommands;

use fintrack_bot::Command;

#[test]
fn parses_every_registered_command() {
    let cases = [
        ("/start", Command::Start),
        ("/help", Command::Help),
        ("/guide", Command::Guide),
        ("/tips", Command::Tips),
        ("/why", Command::Why),
        ("/language", Command::Language),
        ("/version", Command::Version),
        ("/donate", Command::Donate),
        ("/support", Command::Support),
    ];

    for (text, expected) in cases {
        assert_eq!(Command::parse(text, "fintrack_bot").unwrap(), expected, "{text}");
    }
}

#[test]
fn parses_command_with_bot_mention() {
    assert_eq!(Command::parse("/start@fintrack_bot", "fintrack_bot").unwrap(), Command::Start);
}

#[test]
fn rejects_unknown_and_plain_text() {
    assert!(Command::parse("/reset", "fintrack_bot").is_err());
    assert!(Command::parse("hello there", "fintrack_bot").is_err());
}

#[test]
fn command_menu_is_fully_described() {
    let registered = Command::bot_commands();
    assert_eq!(registered.len(), 9);
    for command in registered {
        assert!(!command.description.is_empty(), "{} has no description", command.command);
    }
}
