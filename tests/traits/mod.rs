mod tests_body_mass;
mod tests_ear_length;
mod tests_hind_foot_length;
mod tests_sex;
mod tests_tail_length;
mod tests_testes_size;
mod tests_testes_state;
