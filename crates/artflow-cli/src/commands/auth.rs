use clap::Subcommand;

use artflow_core::{Authenticator, Database};

#[derive(Subcommand)]
pub enum AuthAction {
    /// Create an account and sign in
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign in to an existing account
    Signin {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out of this device (recorded history is kept)
    Signout,
    /// Print the signed-in account
    Whoami,
}

pub fn run(action: AuthAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open()?;
    let auth = Authenticator::new(&db);

    match action {
        AuthAction::Signup { email, password } => {
            let profile = auth.sign_up(&email, &password)?;
            println!(
                "{{\"type\": \"signed_up\", \"id\": \"{}\", \"email\": \"{}\"}}",
                profile.id, profile.email
            );
        }
        AuthAction::Signin { email, password } => {
            let profile = auth.sign_in(&email, &password)?;
            println!(
                "{{\"type\": \"signed_in\", \"id\": \"{}\", \"email\": \"{}\"}}",
                profile.id, profile.email
            );
        }
        AuthAction::Signout => {
            auth.sign_out()?;
            println!("{{\"type\": \"signed_out\"}}");
        }
        AuthAction::Whoami => match auth.current_user()? {
            Some(profile) => {
                println!(
                    "{{\"email\": \"{}\", \"anxiety_level\": {}, \"sessions\": {}}}",
                    profile.email,
                    profile.anxiety_level,
                    profile.sessions.len()
                );
            }
            None => println!("{{\"signed_in\": false}}"),
        },
    }
    Ok(())
}
