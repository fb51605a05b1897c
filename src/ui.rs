// src/ui.rs
use crate::controller::{SignupController, SubmitOutcome};
use crate::models::{Role, SignupDraft};
use crate::notify::Notifier;
use crate::services::signup::SignupGateway;
use std::io::{self, BufRead, Write};
use tracing::warn;

/// Runs the interactive form until a signup completes or input ends.
/// Submission is sequential, so the submit step is naturally disabled
/// while a request is in flight.
pub async fn run<G: SignupGateway, N: Notifier>(
    controller: &SignupController<G, N>,
    notifier: &impl Notifier,
) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        let draft = match read_draft(&mut input)? {
            Some(draft) => draft,
            None => return Ok(()),
        };

        println!("Signing up...");
        match controller.submit(&draft).await {
            SubmitOutcome::Completed => break,
            // Validation, policy, and transport failures were already
            // reported through the notifier; offer the form again.
            _ => println!(),
        }
    }

    if let Some(password) = controller.generated_password() {
        show_password_panel(&password, notifier, &mut input)?;
    }

    Ok(())
}

/// Prompts for the four form fields. Returns None on end of input.
/// Values are passed through as typed; trimming happens when the wire
/// request is built.
fn read_draft(input: &mut impl BufRead) -> io::Result<Option<SignupDraft>> {
    let email = match prompt(input, "Email: ")? {
        Some(value) => value,
        None => return Ok(None),
    };
    let name = match prompt(input, "Full name: ")? {
        Some(value) => value,
        None => return Ok(None),
    };
    let regno = match prompt(input, "Registration number: ")? {
        Some(value) => value,
        None => return Ok(None),
    };
    let role = match prompt(input, "Role [user/admin] (user): ")? {
        Some(value) => value,
        None => return Ok(None),
    };

    // The form preselects "user"; an unrecognized answer is left unset
    // so validation reports it.
    let role = if role.trim().is_empty() {
        Some(Role::User)
    } else {
        role.parse::<Role>().ok()
    };

    Ok(Some(SignupDraft {
        email,
        name,
        regno,
        role,
    }))
}

fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

fn show_password_panel(
    password: &str,
    notifier: &impl Notifier,
    input: &mut impl BufRead,
) -> io::Result<()> {
    println!();
    println!("Your password (it will not be shown again):");
    println!("  {}", password);

    if let Some(answer) = prompt(input, "Copy to clipboard? [y/N]: ")? {
        if answer.trim().eq_ignore_ascii_case("y") {
            match copy_to_clipboard(password) {
                Ok(()) => notifier.success("Password copied to clipboard!"),
                Err(e) => {
                    warn!("clipboard copy failed: {:#}", e);
                    notifier.error("Could not access the clipboard");
                }
            }
        }
    }

    Ok(())
}

fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_string())?;
    Ok(())
}
