use percent_encoding::percent_decode_str;

/// Looks up `name` in a `document.cookie` style header.
///
/// Values are percent-decoded. Empty values count as absent.
pub fn read_cookie(
  header: &str,
  name: &str
) -> Option<String> {
  header
    .split(';')
    .filter_map(|pair| {
      pair.trim().split_once('=')
    })
    .find(|(key, _)| key.trim() == name)
    .map(|(_, value)| {
      percent_decode_str(value.trim())
        .decode_utf8_lossy()
        .into_owned()
    })
    .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
  use super::read_cookie;

  #[test]
  fn finds_named_cookie_among_others() {
    let header =
      "theme=night; token=abc%2Edef; x=1";
    assert_eq!(
      read_cookie(header, "token")
        .as_deref(),
      Some("abc.def")
    );
    assert_eq!(
      read_cookie(header, "x").as_deref(),
      Some("1")
    );
  }

  #[test]
  fn missing_or_empty_cookie_is_none() {
    assert_eq!(
      read_cookie("theme=night", "token"),
      None
    );
    assert_eq!(
      read_cookie("token=", "token"),
      None
    );
    assert_eq!(read_cookie("", "token"), None);
    assert_eq!(
      read_cookie("mytoken=zzz", "token"),
      None
    );
  }
}
