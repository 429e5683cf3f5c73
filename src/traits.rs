use crate::{Element, RawList};

/// Implements collect to `RawList`.
pub trait RawListIterator: Iterator {
    /// Collects into a list trimmed to the number of items.
    fn collect_raw_list(self) -> RawList<Self::Item> where Self::Item: Element;

    /// Collects into a list allocated once with the exact source length.
    fn collect_exact_raw_list(self) -> RawList<Self::Item>
        where
            Self: ExactSizeIterator,
            Self::Item: Element;

    /// Collects `Ok` items, stopping at the first error.
    fn collect_result_raw_list<I, E>(self) -> Result<RawList<I>, E>
        where
            Self: Iterator<Item=Result<I, E>>,
            I: Element;
}

impl<Q: Iterator> RawListIterator for Q {
    fn collect_raw_list(self) -> RawList<Self::Item> where Self::Item: Element {
        self.collect()
    }

    fn collect_exact_raw_list(self) -> RawList<Self::Item>
        where
            Q: ExactSizeIterator,
            Self::Item: Element
    {
        RawList::from_exact(self)
    }

    fn collect_result_raw_list<I, E>(self) -> Result<RawList<I>, E>
        where
            Self: Iterator<Item=Result<I, E>>,
            I: Element
    {
        let (lower, _) = self.size_hint();
        let mut list = RawList::with_capacity(lower.max(1));
        for item in self {
            list.append(item?);
        }
        list.trim();
        Ok(list)
    }
}

#[cfg(test)]
mod traits_tests {
    use crate::{IntList, RawListIterator};

    #[test]
    fn collect_variants() {
        let trimmed = (0..12i32).filter(|v| v % 2 == 0).collect_raw_list();
        assert_eq!(&[0, 2, 4, 6, 8, 10], trimmed.as_slice());
        assert_eq!(6, trimmed.capacity());

        let exact: IntList = vec![3, 2, 1].into_iter().collect_exact_raw_list();
        assert_eq!(&[3, 2, 1], exact.as_slice());
        assert_eq!(3, exact.capacity());
    }

    #[test]
    fn collect_results_stops_at_error() {
        let ok = vec![Ok(1), Ok(2)].into_iter().collect_result_raw_list::<i32, String>();
        assert_eq!(&[1, 2], ok.unwrap().as_slice());

        let err = vec![Ok(1), Err("bad".to_string()), Ok(3)]
            .into_iter()
            .collect_result_raw_list::<i32, String>();
        assert_eq!(Err("bad".to_string()), err.map(|list| list.len()));
    }
}
