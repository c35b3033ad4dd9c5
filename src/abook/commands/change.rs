use crate::book::AddressBook;
use crate::commands::{record_message, Args, CmdResult, Context};
use crate::error::Result;

/// `change <name> <old> <new>`
pub fn run(book: &mut AddressBook, args: &Args, _ctx: &Context) -> Result<CmdResult> {
    let name = args.get(0)?;
    let old = args.get(1)?;
    let new = args.get(2)?;

    let record = book.find_mut(name)?;
    let message = record_message(record.edit_phone(old, new), |phone| {
        format!("Phone {} changed to {}.", old, phone)
    });
    Ok(CmdResult::default().with_message(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{args, book_with, ctx};
    use crate::commands::CmdMessage;
    use crate::config::AppConfig;
    use crate::error::BookError;

    #[test]
    fn replaces_phone() {
        let config = AppConfig::default();
        let mut book = book_with("john", &["1111111111"]);
        let result = run(
            &mut book,
            &args(&["john", "1111111111", "2222222222"]),
            &ctx(&config),
        )
        .unwrap();

        assert_eq!(
            result.messages,
            vec![CmdMessage::success("Phone 1111111111 changed to 2222222222.")]
        );
        assert_eq!(book.find("john").unwrap().phones()[0].as_str(), "2222222222");
    }

    #[test]
    fn unknown_old_phone_warns() {
        let config = AppConfig::default();
        let mut book = book_with("john", &["1111111111"]);
        let result = run(
            &mut book,
            &args(&["john", "9999999999", "2222222222"]),
            &ctx(&config),
        )
        .unwrap();
        assert_eq!(result.messages, vec![CmdMessage::warning("No such phone exists.")]);
    }

    #[test]
    fn invalid_new_phone_warns() {
        let config = AppConfig::default();
        let mut book = book_with("john", &["1111111111"]);
        let result = run(&mut book, &args(&["john", "1111111111", "22"]), &ctx(&config)).unwrap();
        assert_eq!(
            result.messages,
            vec![CmdMessage::warning("Please enter a valid phone number.")]
        );
    }

    #[test]
    fn missing_contact_is_an_error() {
        let config = AppConfig::default();
        let mut book = AddressBook::new();
        let err = run(
            &mut book,
            &args(&["ghost", "1111111111", "2222222222"]),
            &ctx(&config),
        )
        .unwrap_err();
        assert!(matches!(err, BookError::ContactNotFound(_)));
    }

    #[test]
    fn too_few_arguments() {
        let config = AppConfig::default();
        let mut book = book_with("john", &["1111111111"]);
        let err = run(&mut book, &args(&["john", "1111111111"]), &ctx(&config)).unwrap_err();
        assert!(matches!(err, BookError::InvalidData(2)));
    }
}
