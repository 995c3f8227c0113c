pub mod byte_source;
pub mod dice;

pub mod services {
    pub mod integer_service;
    pub mod dice_service;
}

#[cfg(test)]
mod test_sources;
