use rand::random_range;

use crate::error::SetupError;

/// Region of the die sprite sheet showing one face. Faces are laid out left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clip {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Die {
    sides: u8,
    value: Option<u8>,
}

impl Die {
    pub const SIDES: u8 = 6;

    /// Pixel width and height of one face on the sprite sheet.
    pub const FACE_SIZE: u32 = 46;

    pub fn new() -> Self {
        Die { sides: Self::SIDES, value: None }
    }

    pub fn sides(&self) -> u8 {
        self.sides
    }

    /// Rolls the die using the thread-local generator, which seeds itself from the OS.
    pub fn roll(&mut self) -> u8 {
        let value = random_range(1..=self.sides);
        self.value = Some(value);
        value
    }

    /// Puts the die on a given face.
    pub fn set(&mut self, value: u8) -> Result<(), SetupError> {
        if !(1..=self.sides).contains(&value) {
            return Err(SetupError::InvalidDieValue { value, sides: self.sides });
        }
        self.value = Some(value);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.value = None;
    }

    /// Current face, `None` until the first roll or after the value was discarded.
    pub fn value(&self) -> Option<u8> {
        self.value
    }

    /// Sprite region of the current face.
    pub fn clip(&self) -> Option<Clip> {
        self.value.map(Self::face_clip)
    }

    pub fn face_clip(value: u8) -> Clip {
        Clip {
            x: Self::FACE_SIZE * (value as u32 - 1),
            y: 0,
            w: Self::FACE_SIZE,
            h: Self::FACE_SIZE,
        }
    }

    /// Face shown while the roll animation has `remaining` frames left.
    pub fn animation_face(&self, remaining: u32) -> u8 {
        (remaining % self.sides as u32) as u8 + 1
    }
}

impl Default for Die {
    fn default() -> Self {
        Self::new()
    }
}
