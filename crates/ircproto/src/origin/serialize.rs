use std::fmt;

use super::types::{Origin, OriginKind, OriginRef};

impl fmt::Display for OriginRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            OriginKind::None => Ok(()),
            OriginKind::Server => f.write_str(self.host),
            OriginKind::Unknown => f.write_str(self.nick),
            OriginKind::User => match self.username {
                "" => write!(f, "{}@{}", self.nick, self.host),
                user => write!(f, "{}!{}@{}", self.nick, user, self.host),
            },
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        OriginRef {
            kind: self.kind,
            nick: &self.nick,
            username: &self.username,
            host: &self.host,
        }
        .fmt(f)
    }
}
