use std::collections::BTreeMap;

pub mod callbacks;
pub mod dashboard;
pub mod dispatch;
pub mod integrations;
pub mod model;
pub mod telemetry;

pub type MapType<K, V> = BTreeMap<K, V>;

#[macro_export]
macro_rules! define_map {
    ($key:ty, $value:ty, $name:ident) => {
        #[derive(Debug, Clone, Default)]
        pub struct $name($crate::MapType<$key, $value>);

        impl $name {
            pub fn gets(&self, key: &$key) -> &$value {
                self.0
                    .get(key)
                    .unwrap_or_else(|| panic!("no entry for key {:?}", key))
            }

            pub fn gets_mut(&mut self, key: &$key) -> &mut $value {
                self.0
                    .get_mut(key)
                    .unwrap_or_else(|| panic!("no entry for key {:?}", key))
            }
        }

        impl From<$crate::MapType<$key, $value>> for $name {
            fn from(map: $crate::MapType<$key, $value>) -> Self {
                Self(map)
            }
        }

        impl std::ops::Deref for $name {
            type Target = $crate::MapType<$key, $value>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl IntoIterator for $name {
            type Item = ($key, $value);
            type IntoIter = <$crate::MapType<$key, $value> as IntoIterator>::IntoIter;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }
    };
}
