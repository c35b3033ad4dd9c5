use crate::book::AddressBook;
use crate::commands::{Args, CmdMessage, CmdResult, Context};
use crate::error::Result;
use crate::fields::Phone;

/// `all`: one line per contact, `Name: phone, phone`.
pub fn run(book: &mut AddressBook, _args: &Args, _ctx: &Context) -> Result<CmdResult> {
    if book.is_empty() {
        return Ok(CmdResult::default().with_message(CmdMessage::info("No contacts saved.")));
    }

    let lines = book
        .records()
        .map(|record| {
            let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
            format!("{}: {}", record.name().capitalized(), phones.join(", "))
        })
        .collect();
    Ok(CmdResult::default().with_listing(lines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{args, book_with, ctx};
    use crate::config::AppConfig;
    use crate::fields::Name;
    use crate::record::Record;

    #[test]
    fn lists_contacts_alphabetically() {
        let config = AppConfig::default();
        let mut book = book_with("zoe", &["1111111111", "2222222222"]);
        book.add_record(Record::new(Name::parse("Adam").unwrap()));

        let result = run(&mut book, &args(&[]), &ctx(&config)).unwrap();
        assert_eq!(
            result.listing,
            vec!["Adam: ", "Zoe: 1111111111, 2222222222"]
        );
    }

    #[test]
    fn empty_book() {
        let config = AppConfig::default();
        let mut book = AddressBook::new();
        let result = run(&mut book, &args(&[]), &ctx(&config)).unwrap();
        assert!(result.listing.is_empty());
        assert_eq!(result.messages, vec![CmdMessage::info("No contacts saved.")]);
    }
}
