use crate::model::ListId;

/// Keys the list selector reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
  Next,
  Previous,
  Confirm
}

impl NavKey {
  /// Maps a `KeyboardEvent.key` value.
  pub fn from_key(key: &str) -> Option<Self> {
    match key {
      | "ArrowDown" => Some(NavKey::Next),
      | "ArrowUp" => Some(NavKey::Previous),
      | "Enter" => Some(NavKey::Confirm),
      | _ => None
    }
  }
}

#[must_use]
pub fn next_index(
  index: usize,
  len: usize
) -> usize {
  (index + 1) % len
}

#[must_use]
pub fn previous_index(
  index: usize,
  len: usize
) -> usize {
  (index + len - 1) % len
}

/// Moves the highlight one step through `ids`, wrapping at both ends.
///
/// When `current` is not among `ids`, `Next` lands on the first id and
/// `Previous` on the last. `Confirm` does not move.
pub fn step(
  ids: &[ListId],
  current: Option<&ListId>,
  key: NavKey
) -> Option<ListId> {
  if ids.is_empty() {
    return None;
  }
  let len = ids.len();
  let position = current.and_then(|id| {
    ids.iter().position(|candidate| {
      candidate == id
    })
  });

  let target = match (key, position) {
    | (NavKey::Confirm, _) => {
      return current.cloned();
    }
    | (NavKey::Next, Some(index)) => {
      next_index(index, len)
    }
    | (NavKey::Previous, Some(index)) => {
      previous_index(index, len)
    }
    | (NavKey::Next, None) => 0,
    | (NavKey::Previous, None) => len - 1
  };
  ids.get(target).cloned()
}
