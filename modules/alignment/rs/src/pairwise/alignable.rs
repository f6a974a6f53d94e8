/// Random-access view over the symbols the engine aligns
pub trait Alignable {
    type Symbol;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn len(&self) -> usize;

    fn at(&self, pos: usize) -> &Self::Symbol;
}

impl<T> Alignable for &[T] {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl<T> Alignable for Vec<T> {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}
