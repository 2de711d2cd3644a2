//! Page model for the login modal.
//!
//! The selector constants are the literal contract with the deployed
//! markup and must stay in sync with it. The shared flow here is the only
//! way the suite opens the modal.

use sua::{Element, Result, Session, require_clickable, xpath_literal};

/// Header icon that opens the account dropdown.
pub const USER_ICON: &str = "svg[data-icon='user']";
/// Dropdown container revealed by the user icon.
pub const DROPDOWN_MENU: &str = ".ant-dropdown-menu";
/// Candidate nodes for dropdown entries, matched by text content.
pub const MENU_ENTRIES: &str = "li[role='menuitem'] div";
/// Text of the dropdown entry that opens the login modal.
pub const LOGIN_ENTRY_LABEL: &str = "Увійти";

pub const LOGIN_HEADER: &str = ".login-header";
pub const EMAIL_INPUT: &str = "#basic_email";
pub const PASSWORD_INPUT: &str = "#basic_password";
pub const LOGIN_BUTTON: &str = ".login-button";
/// Toast shown after a successful login.
pub const SUCCESS_MESSAGE: &str = ".ant-message-success";

/// Expected modal header text.
pub const HEADER_TEXT: &str = "Вхід";
pub const EMAIL_PLACEHOLDER: &str = "Введіть ваш емейл";
pub const PASSWORD_PLACEHOLDER: &str = "Введіть ваш пароль";

/// Credentials the dev deployment accepts.
pub const VALID_EMAIL: &str = "test@gmail.com";
pub const VALID_PASSWORD: &str = "TestPass123!";

/// XPath locating a dropdown entry by partial text.
fn menu_entry_xpath(label: &str) -> String {
	format!(
		"//li[@role='menuitem']//div[contains(., {})]",
		xpath_literal(label)
	)
}

/// Opens the account dropdown and clicks through to the login modal.
///
/// The dropdown entry is looked up by partial text; a missing entry fails
/// as not-clickable before any click is dispatched.
pub async fn open_login_modal(session: &Session) -> Result<()> {
	let user_icon = session.wait_until_clickable(USER_ICON).await?;
	session.scroll_into_view(&user_icon).await?;
	session.click(&user_icon, USER_ICON).await?;

	session.wait_until_visible(DROPDOWN_MENU).await?;

	let entry = session
		.find_by_partial_text(
			MENU_ENTRIES,
			&menu_entry_xpath(LOGIN_ENTRY_LABEL),
			LOGIN_ENTRY_LABEL,
		)
		.await?;
	let entry = require_clickable(LOGIN_ENTRY_LABEL, entry)?;
	session.scroll_into_view(&entry).await?;
	session.click(&entry, LOGIN_ENTRY_LABEL).await?;
	Ok(())
}

/// Waits for a form field, types into it, and returns it for read-back.
///
/// Typed values are read back through the `value` property, not the
/// attribute: the attribute keeps its static markup value under W3C
/// semantics.
pub async fn fill_field(session: &Session, selector: &str, value: &str) -> Result<Element> {
	let field = session.wait_until_visible(selector).await?;
	field.send_keys(value).await?;
	Ok(field)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn menu_entry_xpath_targets_menuitem_text() {
		let xpath = menu_entry_xpath("Увійти");
		assert_eq!(xpath, "//li[@role='menuitem']//div[contains(., 'Увійти')]");
	}
}
