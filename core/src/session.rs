// storefront_cart/src/session.rs

use crate::guard::has_token;

/// What the client remembers after a successful login: the bearer token,
/// the username shown in the header, and the wallet balance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
  pub token: Option<String>,
  pub username: Option<String>,
  pub balance: Option<u64>,
}

impl Session {
  pub fn login(&mut self, token: impl Into<String>, username: impl Into<String>, balance: u64) {
    self.token = Some(token.into());
    self.username = Some(username.into());
    self.balance = Some(balance);
  }

  pub fn token(&self) -> Option<&str> {
    self.token.as_deref()
  }

  pub fn has_token(&self) -> bool {
    has_token(self.token())
  }

  pub fn is_logged_in(&self) -> bool {
    self.username.as_deref().is_some_and(|u| !u.is_empty())
  }

  /// Logout.
  pub fn clear(&mut self) {
    *self = Session::default();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn login_then_clear() {
    let mut session = Session::default();
    assert!(!session.has_token());
    assert!(!session.is_logged_in());

    session.login("tok", "crio.do", 5000);
    assert!(session.has_token());
    assert!(session.is_logged_in());
    assert_eq!(session.balance, Some(5000));

    session.clear();
    assert_eq!(session, Session::default());
  }

  #[test]
  fn blank_username_is_not_logged_in() {
    let session = Session {
      username: Some(String::new()),
      ..Default::default()
    };
    assert!(!session.is_logged_in());
  }
}
