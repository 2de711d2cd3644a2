//! The ordered login-modal cases.
//!
//! Every case starts from a freshly loaded base URL (the `before_each`
//! hook) and leaves no cookies behind (the `after_each` hook), so no case
//! depends on state a previous one mutated.

use anyhow::ensure;
use sua::{BoxFut, Case, Session};

use crate::pages::login;

/// Per-case setup: a fresh page state via re-navigation. The session
/// itself is not restarted.
pub fn reset_page(session: &Session) -> BoxFut<'_, anyhow::Result<()>> {
	Box::pin(async move {
		session.goto_base().await?;
		Ok(())
	})
}

/// Per-case teardown: drop authentication artifacts so later cases start
/// signed out.
pub fn clear_cookies(session: &Session) -> BoxFut<'_, anyhow::Result<()>> {
	Box::pin(async move {
		session.clear_cookies().await?;
		Ok(())
	})
}

/// The case list, in execution order.
pub fn login_modal_cases() -> Vec<Case<Session>> {
	vec![
		Case::new("user icon opens the account dropdown", user_icon_opens_dropdown),
		Case::new("login entry opens the modal", login_entry_opens_modal),
		Case::new("modal header shows the login title", header_shows_login_title),
		Case::new("form fields carry the expected placeholders", fields_have_placeholders),
		Case::new("typed credentials land in the fields", typed_values_land_in_fields),
		Case::new("submit control is enabled", submit_is_enabled),
		Case::new("valid credentials produce a success message", valid_login_succeeds),
		Case::new("empty fields are rejected", empty_fields_rejected),
		Case::new("malformed email is rejected", malformed_email_rejected),
		Case::new("wrong password is rejected", wrong_password_rejected),
		Case::new("short password is rejected", short_password_rejected),
	]
}

fn user_icon_opens_dropdown(session: &Session) -> BoxFut<'_, anyhow::Result<()>> {
	Box::pin(async move {
		let icon = session.wait_until_clickable(login::USER_ICON).await?;
		session.scroll_into_view(&icon).await?;
		session.click(&icon, login::USER_ICON).await?;
		session.wait_until_visible(login::DROPDOWN_MENU).await?;
		Ok(())
	})
}

fn login_entry_opens_modal(session: &Session) -> BoxFut<'_, anyhow::Result<()>> {
	Box::pin(async move {
		// Completing the flow without an error is the assertion.
		login::open_login_modal(session).await?;
		Ok(())
	})
}

fn header_shows_login_title(session: &Session) -> BoxFut<'_, anyhow::Result<()>> {
	Box::pin(async move {
		login::open_login_modal(session).await?;
		let header = session.wait_until_visible(login::LOGIN_HEADER).await?;
		let text = header.text().await?;
		ensure!(
			text == login::HEADER_TEXT,
			"header text was {text:?}, expected {:?}",
			login::HEADER_TEXT
		);
		Ok(())
	})
}

fn fields_have_placeholders(session: &Session) -> BoxFut<'_, anyhow::Result<()>> {
	Box::pin(async move {
		login::open_login_modal(session).await?;

		let email = session.wait_until_visible(login::EMAIL_INPUT).await?;
		let placeholder = email.attr("placeholder").await?;
		ensure!(
			placeholder.as_deref() == Some(login::EMAIL_PLACEHOLDER),
			"email placeholder was {placeholder:?}"
		);

		let password = session.find(login::PASSWORD_INPUT).await?;
		let placeholder = password.attr("placeholder").await?;
		ensure!(
			placeholder.as_deref() == Some(login::PASSWORD_PLACEHOLDER),
			"password placeholder was {placeholder:?}"
		);
		Ok(())
	})
}

fn typed_values_land_in_fields(session: &Session) -> BoxFut<'_, anyhow::Result<()>> {
	Box::pin(async move {
		login::open_login_modal(session).await?;

		let email = login::fill_field(session, login::EMAIL_INPUT, login::VALID_EMAIL).await?;
		let password =
			login::fill_field(session, login::PASSWORD_INPUT, login::VALID_PASSWORD).await?;

		let value = email.prop("value").await?;
		ensure!(
			value.as_deref() == Some(login::VALID_EMAIL),
			"email field held {value:?} after typing"
		);
		let value = password.prop("value").await?;
		ensure!(
			value.as_deref() == Some(login::VALID_PASSWORD),
			"password field held {value:?} after typing"
		);
		Ok(())
	})
}

fn submit_is_enabled(session: &Session) -> BoxFut<'_, anyhow::Result<()>> {
	Box::pin(async move {
		login::open_login_modal(session).await?;

		// Enablement is asserted on the pristine form, with nothing typed.
		// Whether an empty form should leave the button enabled is pending
		// product clarification; until then this encodes the observed
		// behavior rather than the intended one.
		let button = session.wait_until_visible(login::LOGIN_BUTTON).await?;
		ensure!(
			button.is_enabled().await?,
			"login button is disabled on a freshly opened modal"
		);
		Ok(())
	})
}

fn valid_login_succeeds(session: &Session) -> BoxFut<'_, anyhow::Result<()>> {
	Box::pin(async move {
		login::open_login_modal(session).await?;

		login::fill_field(session, login::EMAIL_INPUT, login::VALID_EMAIL).await?;
		login::fill_field(session, login::PASSWORD_INPUT, login::VALID_PASSWORD).await?;

		let button = session.wait_until_clickable(login::LOGIN_BUTTON).await?;
		session.click(&button, login::LOGIN_BUTTON).await?;

		let toast = session.wait_until_visible(login::SUCCESS_MESSAGE).await?;
		ensure!(toast.is_displayed().await?, "success message is not displayed");
		Ok(())
	})
}

fn empty_fields_rejected(session: &Session) -> BoxFut<'_, anyhow::Result<()>> {
	Box::pin(async move {
		login::open_login_modal(session).await?;
		// TODO: assert the rejection behavior for submitting with both
		// fields empty once the product defines it.
		Ok(())
	})
}

fn malformed_email_rejected(session: &Session) -> BoxFut<'_, anyhow::Result<()>> {
	Box::pin(async move {
		login::open_login_modal(session).await?;
		// TODO: assert the validation message for a malformed email once
		// the product defines it.
		Ok(())
	})
}

fn wrong_password_rejected(session: &Session) -> BoxFut<'_, anyhow::Result<()>> {
	Box::pin(async move {
		login::open_login_modal(session).await?;
		// TODO: assert the failure path for a wrong password once the
		// product defines it.
		Ok(())
	})
}

fn short_password_rejected(session: &Session) -> BoxFut<'_, anyhow::Result<()>> {
	Box::pin(async move {
		login::open_login_modal(session).await?;
		// TODO: assert the validation message for a too-short password
		// once the product defines it.
		Ok(())
	})
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn case_list_covers_the_whole_flow_in_order() {
		let cases = login_modal_cases();
		assert_eq!(cases.len(), 11);
		assert_eq!(cases[0].name, "user icon opens the account dropdown");
		assert_eq!(cases[6].name, "valid credentials produce a success message");
		assert_eq!(cases[10].name, "short password is rejected");
	}

	#[test]
	fn case_names_are_unique() {
		let cases = login_modal_cases();
		let names: HashSet<_> = cases.iter().map(|case| case.name).collect();
		assert_eq!(names.len(), cases.len());
	}
}
