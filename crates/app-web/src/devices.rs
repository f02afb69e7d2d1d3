// Camera bookkeeping that does not touch the browser: which device comes
// next, and whether an in-flight request is still wanted.

/// Round-robin over the enumerated `videoinput` device ids.
#[derive(Clone, Debug, Default)]
pub struct DeviceCycle {
    ids: Vec<String>,
    index: usize,
    queried: bool,
}

impl DeviceCycle {
    /// Record the enumeration result. Enumeration happens once, after the
    /// first stream is granted, because labels and ids are hidden before that.
    pub fn set_devices(&mut self, ids: Vec<String>) {
        self.ids = ids;
        self.index = 0;
        self.queried = true;
    }

    pub fn is_queried(&self) -> bool {
        self.queried
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn has_multiple(&self) -> bool {
        self.ids.len() > 1
    }

    pub fn current(&self) -> Option<&str> {
        self.ids.get(self.index).map(String::as_str)
    }

    /// Point the cursor at the device actually streaming, if it is known.
    pub fn sync_to(&mut self, active_id: &str) -> bool {
        match self.ids.iter().position(|id| id == active_id) {
            Some(i) => {
                self.index = i;
                true
            }
            None => false,
        }
    }

    /// Step to the next device and return its id. With fewer than two
    /// devices there is nothing to switch to.
    pub fn advance(&mut self) -> Option<&str> {
        if !self.has_multiple() {
            return None;
        }
        self.index = (self.index + 1) % self.ids.len();
        self.current()
    }
}

/// Monotonic request counter. A camera request remembers the token it was
/// issued with; once a newer request (or a teardown) bumps the counter the
/// older result is discarded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadGeneration(u64);

impl LoadGeneration {
    pub fn begin(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }

    /// Invalidate every outstanding token.
    pub fn invalidate(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.0 == token
    }
}
