use std::collections::BTreeSet;

use alternates::domain::id::ProductId;

/// Reference model of the grouping semantics over plain sets.
#[derive(Debug, Default, Clone)]
pub struct PartitionModel {
    groups: Vec<BTreeSet<ProductId>>,
}

impl PartitionModel {
    fn find(&self, product: ProductId) -> Option<usize> {
        self.groups.iter().position(|group| group.contains(&product))
    }

    pub fn connect(&mut self, a: ProductId, b: ProductId) {
        if a == b {
            return;
        }
        match (self.find(a), self.find(b)) {
            (None, None) => self.groups.push([a, b].into_iter().collect()),
            (Some(i), None) => {
                self.groups[i].insert(b);
            }
            (None, Some(j)) => {
                self.groups[j].insert(a);
            }
            (Some(i), Some(j)) if i != j => {
                let absorbed = self.groups.remove(j);
                let i = if j < i { i - 1 } else { i };
                self.groups[i].extend(absorbed);
            }
            _ => {}
        }
    }

    pub fn disconnect(&mut self, product: ProductId) {
        if let Some(i) = self.find(product) {
            self.groups[i].remove(&product);
            if self.groups[i].len() < 2 {
                self.groups.remove(i);
            }
        }
    }

    pub fn partition(&self) -> BTreeSet<BTreeSet<ProductId>> {
        self.groups.iter().cloned().collect()
    }
}
