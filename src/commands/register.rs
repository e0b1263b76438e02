use std::io::{BufRead, Write};

use tracing::debug;

use crate::cli::RegisterArgs;
use crate::error::Result;
use crate::input::TokenReader;
use crate::output;
use crate::registry::RecordAppender;
use crate::types::UserRecord;

/// Run the interactive registration. Returns whether the record was appended;
/// an unavailable registry file is reported on `out`, not as an error.
pub fn run<R: BufRead, W: Write>(
    appender: &RecordAppender,
    args: RegisterArgs,
    input: R,
    out: &mut W,
) -> Result<bool> {
    output::display_header(out)?;

    let mut tokens = TokenReader::new(input);
    let id = match args.id {
        Some(id) => id.into_bytes(),
        None => {
            output::prompt(out, "Enter DLG ID")?;
            tokens.next_token()?
        }
    };
    let email = match args.email {
        Some(email) => email.into_bytes(),
        None => {
            output::prompt(out, "Enter Email")?;
            tokens.next_token()?
        }
    };

    let record = UserRecord::new(id, email);
    debug!(
        id = %record.display_id(),
        email = %String::from_utf8_lossy(&record.email),
        path = %appender.path().display(),
        "registering"
    );
    output::progress(
        out,
        &format!("Initializing System Registration for: {}", record.display_id()),
    )?;

    let registered = match appender.register(record) {
        Ok(()) => {
            output::progress(out, "Quantum Handshake Successful. System Link Established.")?;
            true
        }
        Err(_) => false,
    };

    output::status(out, registered)?;
    Ok(registered)
}
