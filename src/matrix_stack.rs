use nalgebra::Matrix4;

use crate::{error::Error, geometry::FloatType};

/// Stack of transformation matrices with an identity seeded at the bottom.
///
/// The bottom entry can never be removed, so [`top`] is always available.
///
/// [`top`]: MatrixStack::top
#[derive(Clone, Debug)]
pub struct MatrixStack {
    stack: Vec<Matrix4<FloatType>>,
}

impl MatrixStack {
    pub fn new() -> MatrixStack {
        MatrixStack {
            stack: vec![Matrix4::identity()],
        }
    }

    /// Duplicates the top matrix.
    pub fn push(&mut self) {
        let top = *self.top();
        self.stack.push(top);
    }

    /// Removes the top matrix, restoring the one below it.
    pub fn pop(&mut self) -> Result<(), Error> {
        if self.stack.len() == 1 {
            return Err(Error::LogicError(
                "cannot remove the bottom of the stack".to_owned(),
            ));
        }
        self.stack.pop();
        Ok(())
    }

    pub fn top(&self) -> &Matrix4<FloatType> {
        self.stack.last().expect("an identity stays at the bottom")
    }

    pub fn top_mut(&mut self) -> &mut Matrix4<FloatType> {
        self.stack
            .last_mut()
            .expect("an identity stays at the bottom")
    }

    /// Number of matrices on the stack, at least one.
    pub fn len(&self) -> usize {
        self.stack.len()
    }
}

impl Default for MatrixStack {
    fn default() -> MatrixStack {
        MatrixStack::new()
    }
}
